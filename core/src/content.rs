use std::fmt;
use std::str::FromStr;

pub type PageId = u32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Cover,
    Intro,
    Article,
    Quote,
    Image,
    Back,
}

impl PageKind {
    pub const ALL: [PageKind; 6] = [
        PageKind::Cover,
        PageKind::Intro,
        PageKind::Article,
        PageKind::Quote,
        PageKind::Image,
        PageKind::Back,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Cover => "cover",
            PageKind::Intro => "intro",
            PageKind::Article => "article",
            PageKind::Quote => "quote",
            PageKind::Image => "image",
            PageKind::Back => "back",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        PageKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownVariant::new("page kind", value))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what} '{value}'")]
pub struct UnknownVariant {
    what: &'static str,
    value: String,
}

impl UnknownVariant {
    fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoverPage {
    pub id: PageId,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub text: Option<&'static str>,
    pub image_url: Option<&'static str>,
}

/// Body copy shared by intro and article pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextPage {
    pub id: PageId,
    pub title: Option<&'static str>,
    pub subtitle: Option<&'static str>,
    pub text: Option<&'static str>,
    pub alignment: Alignment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuotePage {
    pub id: PageId,
    pub text: &'static str,
    pub attribution: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImagePage {
    pub id: PageId,
    pub image_url: &'static str,
    pub caption: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackPage {
    pub id: PageId,
    pub title: Option<&'static str>,
    pub text: Option<&'static str>,
    pub image_url: Option<&'static str>,
}

/// One page of the magazine. Each kind carries only the fields its layout
/// reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageContent {
    Cover(CoverPage),
    Intro(TextPage),
    Article(TextPage),
    Quote(QuotePage),
    Image(ImagePage),
    Back(BackPage),
}

impl PageContent {
    pub fn id(&self) -> PageId {
        match self {
            PageContent::Cover(page) => page.id,
            PageContent::Intro(page) | PageContent::Article(page) => page.id,
            PageContent::Quote(page) => page.id,
            PageContent::Image(page) => page.id,
            PageContent::Back(page) => page.id,
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            PageContent::Cover(_) => PageKind::Cover,
            PageContent::Intro(_) => PageKind::Intro,
            PageContent::Article(_) => PageKind::Article,
            PageContent::Quote(_) => PageKind::Quote,
            PageContent::Image(_) => PageKind::Image,
            PageContent::Back(_) => PageKind::Back,
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            PageContent::Cover(page) => Some(page.title),
            PageContent::Intro(page) | PageContent::Article(page) => page.title,
            PageContent::Back(page) => page.title,
            PageContent::Quote(_) | PageContent::Image(_) => None,
        }
    }

    pub fn image_url(&self) -> Option<&'static str> {
        match self {
            PageContent::Cover(page) => page.image_url,
            PageContent::Image(page) => Some(page.image_url),
            PageContent::Back(page) => page.image_url,
            PageContent::Intro(_) | PageContent::Article(_) | PageContent::Quote(_) => None,
        }
    }
}
