use crate::config::ClassifierConfig;
use crate::results::RawPage;
use regex::RegexSet;

/// URL path fragments that suggest a product or specification page
const PRODUCT_URL_PATTERNS: &[&str] = &[
    r"(?i)/product",
    r"(?i)/products",
    r"(?i)/drone",
    r"(?i)/uav",
    r"(?i)/specification",
    r"(?i)/tech",
    r"(?i)/technical",
    r"(?i)/detail",
];

/// Bilingual vocabulary of technical-specification terms checked against
/// the lowercased page text
pub const SPEC_KEYWORDS: &[&str] = &[
    "技术参数",
    "技术规格",
    "产品规格",
    "规格参数",
    "性能参数",
    "产品参数",
    "参数配置",
    "技术指标",
    "产品特性",
    "功能特点",
    "specifications",
    "technical data",
    "parameters",
    "performance",
    "features",
    "dimensions",
    "weight",
    "battery",
    "camera",
    "sensor",
    "飞行时间",
    "续航时间",
    "最大速度",
    "最大高度",
    "控制距离",
    "载重",
    "分辨率",
    "像素",
    "重量",
    "电池",
    "相机",
    "传感器",
    "遥控器",
];

/// Content-judgment capability: how confident are we that this text
/// describes a product's technical specifications?
///
/// The shipped implementation is keyword-based and fully deterministic;
/// a learned model scoring the same scale is a drop-in replacement.
pub trait SpecSignal {
    /// Confidence in [0, 1] that the text is product-spec content
    fn confidence(&self, text: &str) -> f32;
}

/// Deterministic signal: the number of distinct vocabulary terms found in
/// the text, scaled so five or more hits saturate at full confidence.
#[derive(Debug, Default)]
pub struct KeywordSignal;

impl SpecSignal for KeywordSignal {
    fn confidence(&self, text: &str) -> f32 {
        let lowered = text.to_lowercase();
        let hits = SPEC_KEYWORDS
            .iter()
            .filter(|kw| lowered.contains(*kw))
            .count();

        (hits as f32 / 5.0).min(1.0)
    }
}

/// Decides whether a crawled page is worth deep field extraction.
///
/// A page is a candidate when its URL matches a product pattern AND the
/// content signal clears the decision threshold. The threshold is relaxed
/// once the keyword vocabulary has already fired on the page text.
pub struct Classifier {
    url_patterns: RegexSet,
    signal: Box<dyn SpecSignal + Send + Sync>,
    base_threshold: f32,
    keyword_threshold: f32,
}

impl Classifier {
    /// Build a classifier with the default keyword signal
    pub fn new(config: &ClassifierConfig) -> Self {
        Self::with_signal(config, Box::new(KeywordSignal))
    }

    /// Build a classifier around a custom content signal
    pub fn with_signal(
        config: &ClassifierConfig,
        signal: Box<dyn SpecSignal + Send + Sync>,
    ) -> Self {
        let url_patterns =
            RegexSet::new(PRODUCT_URL_PATTERNS).expect("product URL patterns are valid regexes");

        Self {
            url_patterns,
            signal,
            base_threshold: config.base_threshold,
            keyword_threshold: config.keyword_threshold,
        }
    }

    /// Pure predicate: is this page a candidate product page?
    pub fn is_candidate(&self, page: &RawPage) -> bool {
        if !self.url_patterns.is_match(&page.url) {
            ::log::debug!("URL pattern miss: {}", page.url);
            return false;
        }

        let lowered = page.content.to_lowercase();
        let keyword_match = SPEC_KEYWORDS.iter().any(|kw| lowered.contains(*kw));
        let threshold = if keyword_match {
            self.keyword_threshold
        } else {
            self.base_threshold
        };

        let confidence = self.signal.confidence(&page.content);
        ::log::debug!(
            "Page confidence {:.4} against threshold {} (keyword match: {}) for {}",
            confidence,
            threshold,
            keyword_match,
            page.url
        );

        confidence > threshold
    }
}
