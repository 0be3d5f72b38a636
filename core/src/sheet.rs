use crate::content::PageContent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
}

/// A physical leaf: page `2i` on the front, page `2i + 1` (if any) on the back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sheet<'a> {
    pub index: usize,
    pub front: &'a PageContent,
    pub back: Option<&'a PageContent>,
}

impl<'a> Sheet<'a> {
    pub fn face(&self, face: Face) -> Option<&'a PageContent> {
        match face {
            Face::Front => Some(self.front),
            Face::Back => self.back,
        }
    }
}

pub fn sheet_count(page_count: usize) -> usize {
    page_count.div_ceil(2)
}

pub fn sheet_at(content: &[PageContent], index: usize) -> Option<Sheet<'_>> {
    let front = content.get(index.checked_mul(2)?)?;
    Some(Sheet {
        index,
        front,
        back: content.get(index * 2 + 1),
    })
}

pub fn sheets(content: &[PageContent]) -> impl Iterator<Item = Sheet<'_>> {
    content.chunks(2).enumerate().map(|(index, pair)| Sheet {
        index,
        front: &pair[0],
        back: pair.get(1),
    })
}
