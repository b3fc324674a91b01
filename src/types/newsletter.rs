//! Static editorial content for the weekly digest page.

use serde::Serialize;

/// One weekday entry in the digest.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestEntry {
    pub day: &'static str,
    pub headline: &'static str,
    /// Label of the side note ("Tip", "Term to Know", ...).
    pub note_label: &'static str,
    pub note: &'static str,
}

/// A link to an outside reading resource.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub url: &'static str,
}

/// A term with its definition.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Term {
    pub term: &'static str,
    pub definition: &'static str,
}

/// The full newsletter page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub title: &'static str,
    pub week: Vec<DigestEntry>,
    pub beginners_corner: Vec<&'static str>,
    pub quote: &'static str,
    pub quote_author: &'static str,
    pub term_of_the_week: Term,
    pub resources: Vec<Resource>,
    pub fun_fact: &'static str,
}

impl Newsletter {
    /// This week's issue.
    pub fn current() -> Self {
        Self {
            title: "Weekly Digest - Stock Market Insights",
            week: vec![
                DigestEntry {
                    day: "Monday",
                    headline: "Markets opened slightly lower as investors awaited inflation data.",
                    note_label: "Tip",
                    note: "Don't react to every Monday dip. Zoom out, not in!",
                },
                DigestEntry {
                    day: "Tuesday",
                    headline: "AI stocks boosted the tech sector after Nvidia's earnings beat expectations.",
                    note_label: "Term to Know",
                    note: "Volatility: how much a stock price swings.",
                },
                DigestEntry {
                    day: "Wednesday",
                    headline: "The Fed held interest rates steady. No hike = market calm.",
                    note_label: "Tip",
                    note: "Rate decisions can influence stock & bond prices.",
                },
                DigestEntry {
                    day: "Thursday",
                    headline: "Mid-cap stocks led gains, driven by optimism in manufacturing.",
                    note_label: "Did You Know?",
                    note: "Mid-caps often outperform in recovery cycles.",
                },
                DigestEntry {
                    day: "Friday",
                    headline: "Markets closed the week higher. Energy stocks rebounded.",
                    note_label: "Quick Tip",
                    note: "Check earnings season calendars to stay ahead.",
                },
            ],
            beginners_corner: vec![
                "Start with index funds or ETFs if you're new.",
                "Don't try to time the market. Focus on consistency.",
                "Learn basic indicators like P/E ratio, moving average, and volume.",
            ],
            quote: "An investment in knowledge pays the best interest.",
            quote_author: "Benjamin Franklin",
            term_of_the_week: Term {
                term: "Bear Market",
                definition: "A market condition where prices fall 20% or more from recent highs.",
            },
            resources: vec![
                Resource {
                    title: "Bloomberg Markets",
                    url: "https://www.bloomberg.com/markets",
                },
                Resource {
                    title: "CNBC Finance",
                    url: "https://www.cnbc.com/finance/",
                },
                Resource {
                    title: "Investopedia Education",
                    url: "https://www.investopedia.com/",
                },
            ],
            fun_fact: "Apple Inc. was the first U.S. company to reach a $3 trillion market cap, in 2022!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_runs_monday_to_friday() {
        let days: Vec<_> = Newsletter::current().week.iter().map(|e| e.day).collect();
        assert_eq!(days, vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]);
    }

    #[test]
    fn test_resources_are_https() {
        for resource in Newsletter::current().resources {
            assert!(resource.url.starts_with("https://"), "{}", resource.url);
        }
    }

    #[test]
    fn test_newsletter_serialization() {
        let json = serde_json::to_value(Newsletter::current()).unwrap();
        assert_eq!(json["termOfTheWeek"]["term"], "Bear Market");
        assert_eq!(json["quoteAuthor"], "Benjamin Franklin");
        assert_eq!(json["beginnersCorner"].as_array().unwrap().len(), 3);
        assert_eq!(json["week"][1]["noteLabel"], "Term to Know");
    }
}
