use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    pub(crate) status: Option<String>,
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) articles: Vec<RawArticle>,
}

#[derive(Deserialize)]
pub(crate) struct RawArticle {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) source: Option<Source>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
    pub(crate) url: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct Source {
    pub(crate) name: Option<String>,
}
