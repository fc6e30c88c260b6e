use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct SummaryEnvelope {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) extract: Option<String>,
    pub(crate) content_urls: Option<ContentUrls>,
}

#[derive(Deserialize)]
pub(crate) struct ContentUrls {
    pub(crate) desktop: Option<PageUrl>,
}

#[derive(Deserialize)]
pub(crate) struct PageUrl {
    pub(crate) page: Option<String>,
}
