//! Filter code tables of the opendict search API.
//!
//! Every filter is a comma separated list of numeric codes, `0` meaning "no restriction".
//! Codes are 1-based indexes into the label tables below.

use std::fmt;

use clap::ValueEnum;

use crate::{Error, Result};

/// Rendered value of a filter that does not restrict anything.
pub const ALL: &str = "0";

const POS_LABELS: &[&str] = &[
    "명사",
    "대명사",
    "수사",
    "조사",
    "동사",
    "형용사",
    "관형사",
    "부사",
    "감탄사",
    "접사",
    "의존 명사",
    "보조 동사",
    "보조 형용사",
    "어미",
    "관형사·명사",
    "수사·관형사",
    "명사·부사",
    "감탄사·명사",
    "대명사·부사",
    "대명사·감탄사",
    "동사·형용사",
    "관형사·감탄사",
    "부사·감탄사",
    "의존명사·조사",
    "수사·관형사·명사",
    "대명사·관형사",
    "품사 없음",
];

const REGION_LABELS: &[&str] = &[
    "강원",
    "경기",
    "경남",
    "경북",
    "경상",
    "전남",
    "전라",
    "전북",
    "제주",
    "충남",
    "충북",
    "충청",
    "평남",
    "평북",
    "평안",
    "함경",
    "함남",
    "함북",
    "황해",
    "중국 길림성",
    "중국 요령성",
    "중국 흑룡강성",
    "중앙아시아",
];

const CATEGORY_LABELS: &[&str] = &[
    "가톨릭",
    "건설",
    "경영",
    "경제",
    "고유명 일반",
    "공업",
    "공예",
    "공학 일반",
    "광업",
    "교육",
    "교통",
    "군사",
    "기계",
    "기독교",
    "농업",
    "동물",
    "매체",
    "무용",
    "문학",
    "물리",
    "미술",
    "민속",
    "법률",
    "보건 일반",
    "복식",
    "복지",
    "불교",
    "사회 일반",
    "산업 일반",
    "생명",
    "서비스업",
    "수산업",
    "수의",
    "수학",
    "식물",
    "식품",
    "심리",
    "약학",
    "언어",
    "역사",
    "연기",
    "영상",
    "예체능 일반",
    "음악",
    "의학",
    "인명",
    "인문 일반",
    "임업",
    "자연 일반",
    "재료",
    "전기·전자",
    "정보·통신",
    "정치",
    "종교 일반",
    "지구",
    "지리",
    "지명",
    "책명",
    "천문",
    "천연자원",
    "철학",
    "체육",
    "한의",
    "해양",
    "행정",
    "화학",
    "환경",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FilterKind {
    /// Part of speech (품사)
    Pos,
    /// Dialect region (방언 지역)
    Region,
    /// Subject category (전문 분야)
    #[value(name = "cat")]
    Category,
}

impl FilterKind {
    /// Prompt order.
    pub const ALL_KINDS: [FilterKind; 3] = [FilterKind::Pos, FilterKind::Region, FilterKind::Category];

    /// Name of the query parameter carrying this filter.
    pub fn param_name(self) -> &'static str {
        match self {
            FilterKind::Pos => "pos",
            FilterKind::Region => "region",
            FilterKind::Category => "cat",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FilterKind::Pos => "Part of speech (품사)",
            FilterKind::Region => "Dialect region (방언 지역)",
            FilterKind::Category => "Subject category (전문 분야)",
        }
    }

    /// Labels indexed by `code - 1`.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            FilterKind::Pos => POS_LABELS,
            FilterKind::Region => REGION_LABELS,
            FilterKind::Category => CATEGORY_LABELS,
        }
    }

    /// Printable listing of every code, one per line, starting with `0: 전체`.
    pub fn menu(self) -> String {
        let mut menu = format!("{}\n{:>4}: 전체 (all)\n", self.title(), ALL);
        for (idx, label) in self.labels().iter().enumerate() {
            menu.push_str(&format!("{:>4}: {}\n", idx + 1, label));
        }
        menu
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param_name())
    }
}

/// Selected codes of one filter. Empty selects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCodes {
    codes: Vec<u16>,
}

impl FilterCodes {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_all(&self) -> bool {
        self.codes.is_empty()
    }

    /// Parses operator input such as `"1, 5,6"`.
    /// Whitespace anywhere is ignored, an empty answer means all, duplicates are dropped.
    pub fn parse(kind: FilterKind, input: &str) -> Result<Self> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() || compact == ALL {
            return Ok(Self::all());
        }

        let invalid = |reason: String| Error::InvalidFilter {
            kind,
            input: input.trim().to_owned(),
            reason,
        };
        let max = kind.labels().len();

        let mut codes = Vec::new();
        for part in compact.split(',') {
            if part.is_empty() {
                return Err(invalid("empty code between commas".into()));
            }
            let code: u16 = part
                .parse()
                .map_err(|_| invalid(format!("{part:?} is not a number")))?;
            if code == 0 {
                return Err(invalid("0 (all) must be given on its own".into()));
            }
            if usize::from(code) > max {
                return Err(invalid(format!("{code} is not a known code, expected 1..={max}")));
            }
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        Ok(Self { codes })
    }
}

impl fmt::Display for FilterCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.codes.is_empty() {
            return f.write_str(ALL);
        }
        let joined = self
            .codes
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}
