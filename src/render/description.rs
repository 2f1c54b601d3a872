/// 이 길이를 넘으면 잘라서 보여준다
pub const SHORT_DESCRIPTION_CHARS: usize = 40;

/// 설명 펼치기/접기 표시 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionToggle {
    full: String,
    short: String,
    expanded: bool,
}

impl DescriptionToggle {
    pub fn new(description: Option<&str>) -> Self {
        let full = description.unwrap_or_default().to_string();
        let short = if full.chars().count() > SHORT_DESCRIPTION_CHARS {
            let head: String = full.chars().take(SHORT_DESCRIPTION_CHARS).collect();
            format!("{head}...")
        } else {
            full.clone()
        };

        Self {
            full,
            short,
            expanded: false,
        }
    }

    /// 토글 버튼이 필요한지
    pub fn is_truncatable(&self) -> bool {
        self.full != self.short
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        if self.is_truncatable() {
            self.expanded = !self.expanded;
        }
    }

    /// 현재 보여줄 텍스트
    pub fn text(&self) -> &str {
        if self.expanded {
            &self.full
        } else {
            &self.short
        }
    }

    pub fn label(&self) -> &'static str {
        if self.expanded {
            "View Less"
        } else {
            "View More"
        }
    }

    pub fn full(&self) -> &str {
        &self.full
    }

    pub fn short(&self) -> &str {
        &self.short
    }
}
