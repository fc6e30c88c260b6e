//! Well-known companies with their ticker, search name and encyclopedia page.

use crate::report::ReportRequest;

/// Input defaults for one well-known company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub ticker: &'static str,
    pub company: &'static str,
    pub wiki_page: &'static str,
}

const fn p(
    label: &'static str,
    ticker: &'static str,
    company: &'static str,
    wiki_page: &'static str,
) -> Preset {
    Preset {
        label,
        ticker,
        company,
        wiki_page,
    }
}

pub const PRESETS: &[Preset] = &[
    p("Tesla", "TSLA", "Tesla", "Tesla,_Inc."),
    p("Apple", "AAPL", "Apple", "Apple_Inc."),
    p("Microsoft", "MSFT", "Microsoft", "Microsoft"),
    p("Amazon", "AMZN", "Amazon", "Amazon_(company)"),
    p("Google", "GOOGL", "Google", "Google"),
    p("Meta", "META", "Meta", "Meta_Platforms"),
    p("Netflix", "NFLX", "Netflix", "Netflix"),
    p("Nvidia", "NVDA", "Nvidia", "Nvidia"),
    p("Intel", "INTC", "Intel", "Intel"),
    p("AMD", "AMD", "AMD", "Advanced_Micro_Devices"),
    p("Walmart", "WMT", "Walmart", "Walmart"),
    p("JPMorgan", "JPM", "JPMorgan Chase", "JPMorgan_Chase"),
    p("Goldman Sachs", "GS", "Goldman Sachs", "Goldman_Sachs"),
    p("Boeing", "BA", "Boeing", "Boeing"),
    p("Coca-Cola", "KO", "Coca-Cola", "The_Coca-Cola_Company"),
    p("Disney", "DIS", "Disney", "The_Walt_Disney_Company"),
    p("Nike", "NKE", "Nike", "Nike,_Inc."),
    p("Visa", "V", "Visa", "Visa_Inc."),
    p("McDonald's", "MCD", "McDonald's", "McDonald's"),
];

/// Finds a preset by label, ignoring case and surrounding whitespace.
#[must_use]
pub fn find(label: &str) -> Option<&'static Preset> {
    let label = label.trim();
    PRESETS.iter().find(|p| p.label.eq_ignore_ascii_case(label))
}

impl Preset {
    /// A request pre-filled with this preset's ticker, company and page.
    #[must_use]
    pub fn request(&self, news_count: u32) -> ReportRequest {
        ReportRequest {
            ticker: Some(self.ticker.to_string()),
            company_name: Some(self.company.to_string()),
            page_name: Some(self.wiki_page.to_string()),
            news_count,
        }
    }
}
