#[allow(unused_imports)]
use crate::content::{
    Alignment, BackPage, CoverPage, ImagePage, PageContent, PageId, QuotePage, TextPage,
};

include!(concat!(env!("OUT_DIR"), "/magazine_content.rs"));

pub fn magazine() -> &'static [PageContent] {
    MAGAZINE_CONTENT
}

pub fn page_by_id(id: PageId) -> Option<&'static PageContent> {
    MAGAZINE_CONTENT.iter().find(|page| page.id() == id)
}
