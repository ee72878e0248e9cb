//! Wire types for the showcase API responses.

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// The project description document served by `/api/project-info`.
///
/// Built once at startup and never mutated afterwards; handlers hand out
/// copies of the same data for every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectInfo {
    pub name: String,
    pub description: String,
    pub technologies: Vec<Technology>,
    pub architecture: Architecture,
    pub features: Vec<String>,
    pub repository: String,
}

/// A single technology card entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Technology {
    pub name: String,
    pub category: String,
    pub description: String,
    pub icon: TechIcon,
    /// Hex color used to tint the card's icon badge.
    pub color: String,
}

/// Icon keys understood by the frontend renderer.
///
/// Serialized in kebab-case to match the keys of the renderer's icon table.
/// `Package` and `Box` share a glyph but stay distinct keys. Anything outside
/// the fixed set deserializes to [`TechIcon::Unknown`], which the renderer
/// draws with the `box` glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TechIcon {
    Cloud,
    Code,
    GitBranch,
    Activity,
    BarChart,
    Package,
    Box,
    Check,
    #[serde(other)]
    Unknown,
}

impl TechIcon {
    /// The icon-table key the renderer resolves this variant to.
    pub fn key(self) -> &'static str {
        match self {
            TechIcon::Cloud => "cloud",
            TechIcon::Code => "code",
            TechIcon::GitBranch => "git-branch",
            TechIcon::Activity => "activity",
            TechIcon::BarChart => "bar-chart",
            TechIcon::Package => "package",
            TechIcon::Check => "check",
            TechIcon::Box | TechIcon::Unknown => "box",
        }
    }
}

/// Architecture summary, one paragraph per fixed topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Architecture {
    pub infrastructure: String,
    pub networking: String,
    pub gitops: String,
    pub monitoring: String,
}

/// Response body of `/api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Seconds since the server process started.
    pub uptime: f64,
}

impl ProjectInfo {
    /// The project this site showcases.
    pub fn showcase() -> Self {
        ProjectInfo {
            name: "GitOps with Monitoring".to_owned(),
            description: "Complete GitOps workflow with ArgoCD on AWS EKS, featuring Prometheus \
                          and Grafana for monitoring"
                .to_owned(),
            technologies: vec![
                Technology {
                    name: "AWS EKS".to_owned(),
                    category: "Infrastructure".to_owned(),
                    description: "Managed Kubernetes cluster on AWS".to_owned(),
                    icon: TechIcon::Cloud,
                    color: "#FF9900".to_owned(),
                },
                Technology {
                    name: "Terraform".to_owned(),
                    category: "Infrastructure as Code".to_owned(),
                    description: "Provision EKS cluster and VPC infrastructure".to_owned(),
                    icon: TechIcon::Code,
                    color: "#7B42BC".to_owned(),
                },
                Technology {
                    name: "ArgoCD".to_owned(),
                    category: "GitOps".to_owned(),
                    description: "Declarative continuous delivery for Kubernetes".to_owned(),
                    icon: TechIcon::GitBranch,
                    color: "#EF7B4D".to_owned(),
                },
                Technology {
                    name: "Prometheus".to_owned(),
                    category: "Monitoring".to_owned(),
                    description: "Metrics collection and alerting".to_owned(),
                    icon: TechIcon::Activity,
                    color: "#E6522C".to_owned(),
                },
                Technology {
                    name: "Grafana".to_owned(),
                    category: "Visualization".to_owned(),
                    description: "Metrics visualization and dashboards".to_owned(),
                    icon: TechIcon::BarChart,
                    color: "#F46800".to_owned(),
                },
                Technology {
                    name: "Helm".to_owned(),
                    category: "Package Manager".to_owned(),
                    description: "Deploy Prometheus and Grafana via Helm charts".to_owned(),
                    icon: TechIcon::Package,
                    color: "#0F1689".to_owned(),
                },
                Technology {
                    name: "Kubernetes".to_owned(),
                    category: "Orchestration".to_owned(),
                    description: "Container orchestration platform".to_owned(),
                    icon: TechIcon::Box,
                    color: "#326CE5".to_owned(),
                },
            ],
            architecture: Architecture {
                infrastructure: "AWS EKS cluster with 2 t3.medium nodes across 2 availability \
                                 zones"
                    .to_owned(),
                networking: "VPC with public and private subnets, NAT gateway for outbound \
                             traffic"
                    .to_owned(),
                gitops: "ArgoCD monitors Git repository and automatically syncs changes to \
                         cluster"
                    .to_owned(),
                monitoring: "Prometheus scrapes metrics, Grafana visualizes cluster and \
                             application health"
                    .to_owned(),
            },
            features: vec![
                "Automated GitOps workflow with ArgoCD".to_owned(),
                "Infrastructure provisioned via Terraform".to_owned(),
                "Comprehensive monitoring with Prometheus & Grafana".to_owned(),
                "Auto-sync and self-healing deployments".to_owned(),
                "Multi-AZ high availability setup".to_owned(),
                "Secure VPC networking with NAT gateway".to_owned(),
            ],
            repository: "https://github.com/Amitabh-DevOps/GitOps-with-monitoring.git".to_owned(),
        }
    }
}
