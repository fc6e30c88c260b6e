use serde::Deserialize;

use crate::core::wire::NumOrString;

/// Flat Twelve Data `/quote` body. Error bodies share the shape with
/// `status: "error"`, `code` and `message` set and every quote field missing.
#[derive(Deserialize)]
pub(crate) struct QuoteEnvelope {
    pub(crate) status: Option<String>,
    pub(crate) message: Option<String>,

    pub(crate) symbol: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) exchange: Option<String>,
    pub(crate) currency: Option<String>,

    pub(crate) close: Option<NumOrString>,
    pub(crate) change: Option<NumOrString>,
    pub(crate) percent_change: Option<NumOrString>,
    pub(crate) high: Option<NumOrString>,
    pub(crate) low: Option<NumOrString>,
    pub(crate) previous_close: Option<NumOrString>,
    pub(crate) volume: Option<NumOrString>,

    pub(crate) fifty_two_week: Option<FiftyTwoWeek>,
}

#[derive(Deserialize)]
pub(crate) struct FiftyTwoWeek {
    pub(crate) high: Option<NumOrString>,
    pub(crate) low: Option<NumOrString>,
}
