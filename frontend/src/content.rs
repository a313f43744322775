pub const FIRM_NAME: &str = "PARK & CHOI";
pub const ACCENT_RED: &str = "#931f1d";

/// The full-page sections, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    Insights,
    Lexology,
    Award,
}

pub static SECTIONS: [SectionId; 4] = [
    SectionId::Hero,
    SectionId::Insights,
    SectionId::Lexology,
    SectionId::Award,
];

impl SectionId {
    pub fn key(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Insights => "insights",
            SectionId::Lexology => "lexology",
            SectionId::Award => "award",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Insights => "Insights",
            SectionId::Lexology => "Lexology Index",
            SectionId::Award => "Awards",
        }
    }
}

pub const SUMMARY_CHARS: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsightItem {
    pub category: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
    pub highlight: bool,
}

impl InsightItem {
    /// Card text: the first [`SUMMARY_CHARS`] characters, ending in a single
    /// `...` when the summary was cut here or already trailed off.
    pub fn excerpt(&self) -> String {
        let body = self.summary.trim_end();
        let stripped = body
            .strip_suffix("...")
            .or_else(|| body.strip_suffix('…'))
            .map(str::trim_end);
        let text = stripped.unwrap_or(body);

        match text.char_indices().nth(SUMMARY_CHARS) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None if stripped.is_some() => format!("{}...", text),
            None => text.to_string(),
        }
    }
}

pub static INSIGHTS: [InsightItem; 4] = [
    InsightItem {
        category: "뉴스레터",
        title: "'노란봉투법' 국회 본회의 통과",
        date: "2025.08.25",
        summary: "법안 통과 현황 국회는 2025년 8월 24일 본회의를 열어 출석 의원 186명 중 찬성 183명, 반대 3명으로 이른바 '노란봉투법'이라 불리는 '노동조합 및 노동관계조정법'...",
        highlight: true,
    },
    InsightItem {
        category: "뉴스레터",
        title: "인공지능기본법 시행령 초안 발표",
        date: "2025.09.10",
        summary: "국가인공지능전략위원회 출범, 대한민국 AI 액션플랜 및 국가 AI 정책...",
        highlight: false,
    },
    InsightItem {
        category: "뉴스레터",
        title: "2차 개정 상법 시행 및 배임죄 등 제도 개선...",
        date: "2025.09.09",
        summary: "지난 뉴스레터에서 안내 드린 바와 같이, 대규모 상장회사 집중투표제의...",
        highlight: false,
    },
    InsightItem {
        category: "뉴스레터",
        title: "AI 워싱(AI Washing) 유형 및 규제 동향 (1)",
        date: "2025.08.19",
        summary: "'AI 워싱(AI Washing)'이라고 들어보셨나요? 최근 휴먼뿐만 아니라 금...",
        highlight: false,
    },
];

/// A placehold.co image URL with `text` rendered on it.
pub fn placeholder_image(width: u32, height: u32, background: &str, foreground: &str, text: &str) -> String {
    format!(
        "https://placehold.co/{}x{}/{}/{}?text={}",
        width,
        height,
        background,
        foreground,
        urlencoding::encode(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_have_unique_keys() {
        let mut keys: Vec<_> = SECTIONS.iter().map(|section| section.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SECTIONS.len());
        assert_eq!(SECTIONS[0], SectionId::Hero);
        assert_eq!(SECTIONS[SECTIONS.len() - 1], SectionId::Award);
    }

    #[test]
    fn excerpt_cuts_on_character_boundaries() {
        let summary = "노동조합 및 노동관계조정법 ".repeat(12);
        let item = InsightItem {
            summary: summary.leak(),
            ..INSIGHTS[1].clone()
        };
        assert!(item.summary.chars().count() > SUMMARY_CHARS);
        let excerpt = item.excerpt();
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), SUMMARY_CHARS + 3);
        assert!(item.summary.starts_with(excerpt.trim_end_matches("...")));
    }

    #[test]
    fn trailing_ellipsis_is_not_doubled() {
        for item in &INSIGHTS {
            let excerpt = item.excerpt();
            assert!(excerpt.ends_with("..."), "{excerpt}");
            assert!(!excerpt.ends_with("...."), "{excerpt}");
        }
        // 101 characters including its own ellipsis
        assert_eq!(INSIGHTS[0].summary.chars().count(), SUMMARY_CHARS + 1);
        assert_eq!(INSIGHTS[0].excerpt(), INSIGHTS[0].summary);
    }

    #[test]
    fn long_summary_with_ellipsis_is_cut_once() {
        let summary = format!("{}…", "가".repeat(SUMMARY_CHARS + 20));
        let item = InsightItem {
            summary: summary.leak(),
            ..INSIGHTS[1].clone()
        };
        assert_eq!(item.excerpt(), format!("{}...", "가".repeat(SUMMARY_CHARS)));
    }

    #[test]
    fn short_summary_is_kept_whole() {
        let short = &INSIGHTS[1];
        assert!(short.summary.chars().count() <= SUMMARY_CHARS);
        assert_eq!(short.excerpt(), short.summary);
    }

    #[test]
    fn exactly_limit_is_not_cut() {
        let item = InsightItem {
            summary: "가".repeat(SUMMARY_CHARS).leak(),
            ..INSIGHTS[1].clone()
        };
        assert_eq!(item.excerpt(), item.summary);
    }

    #[test]
    fn placeholder_text_is_encoded() {
        assert_eq!(
            placeholder_image(1920, 1080, "0d0c0c", "ffffff", "KOREAN TRADITIONAL ROOF"),
            "https://placehold.co/1920x1080/0d0c0c/ffffff?text=KOREAN%20TRADITIONAL%20ROOF"
        );
        assert_eq!(
            placeholder_image(500, 300, "4a4e69", "ffffff", "Award+Badge"),
            "https://placehold.co/500x300/4a4e69/ffffff?text=Award%2BBadge"
        );
    }
}
