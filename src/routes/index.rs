use axum::response::IntoResponse;
use dit_contact::{ContactDraft, DIRECT_ENTRY, EmailDomain, Feedback};
use strum::VariantArray;

use crate::config::SiteConfig;
use crate::template::Template;

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub items: &'static [&'static str],
}

pub struct Capability {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "2014",
        label: "설립연도",
    },
    Stat {
        value: "500+",
        label: "고객사",
    },
    Stat {
        value: "15+",
        label: "기술 인증",
    },
    Stat {
        value: "99.9%",
        label: "서비스 가용성",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "하드웨어 유지보수",
        summary: "서버, 스토리지, 네트워크 장비의 예방 점검과 장애 대응을 제공합니다.",
        items: &["정기 예방 점검", "장애 긴급 출동", "부품 교체 및 수리", "자산 관리"],
    },
    Service {
        title: "소프트웨어 유지보수",
        summary: "운영체제와 미들웨어, 업무 시스템을 안정적으로 운영합니다.",
        items: &["OS 및 패치 관리", "데이터베이스 운영", "백업 및 복구", "성능 최적화"],
    },
    Service {
        title: "네트워크 유지보수",
        summary: "사내 네트워크와 보안 장비를 24시간 모니터링합니다.",
        items: &["네트워크 모니터링", "보안 장비 운영", "트래픽 분석", "구성 변경 관리"],
    },
];

pub const CLIENTS: &[&str] = &[
    "삼성전자",
    "LG전자",
    "현대자동차",
    "SK텔레콤",
    "KT",
    "포스코",
    "한국전력",
    "신한은행",
    "KB국민은행",
    "우리은행",
    "롯데그룹",
    "CJ그룹",
];

pub const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "보안 전문성",
        description: "인증된 엔지니어가 보안 정책에 맞춰 시스템을 관리합니다.",
    },
    Capability {
        title: "신속한 대응",
        description: "장애 접수 즉시 원격 지원과 현장 출동을 진행합니다.",
    },
    Capability {
        title: "비용 최적화",
        description: "자산 현황 분석으로 불필요한 유지보수 비용을 줄입니다.",
    },
];

pub struct DomainOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub site: &'a SiteConfig,
    pub draft: &'a ContactDraft,
    pub feedback: Option<&'a Feedback>,
    pub domains: Vec<DomainOption>,
    pub direct_entry: bool,
    pub stats: &'static [Stat],
    pub services: &'static [Service],
    pub clients: &'static [&'static str],
    pub capabilities: &'static [Capability],
}

impl<'a> IndexTemplate<'a> {
    pub fn new(
        site: &'a SiteConfig,
        draft: &'a ContactDraft,
        feedback: Option<&'a Feedback>,
    ) -> Self {
        let direct_entry = draft.is_direct_domain();
        let mut domains = EmailDomain::VARIANTS
            .iter()
            .map(|domain| DomainOption {
                value: domain.as_ref(),
                label: domain.as_ref(),
                selected: domain.as_ref() == draft.email_domain,
            })
            .collect::<Vec<_>>();

        domains.push(DomainOption {
            value: DIRECT_ENTRY,
            label: "직접입력",
            selected: direct_entry,
        });

        Self {
            site,
            draft,
            feedback,
            domains,
            direct_entry,
            stats: STATS,
            services: SERVICES,
            clients: CLIENTS,
            capabilities: CAPABILITIES,
        }
    }
}

/// GET / - Landing page with an empty contact form
pub async fn page(template: Template) -> impl IntoResponse {
    let draft = ContactDraft::default();

    template.render(IndexTemplate::new(&template.site, &draft, None))
}
