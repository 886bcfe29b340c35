//! Career roadmaps: static per-stream guides covering higher studies, public
//! and private sector jobs, entrepreneurship and entrance exams. An empty
//! table is seeded with the MPC, BiPC, Commerce, Arts and B.Tech roadmaps.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::roadmap::RoadmapRow;
use crate::state::AppState;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapContent {
    #[serde(default)]
    pub higher_studies: Vec<String>,
    #[serde(default)]
    pub government_jobs: Vec<String>,
    #[serde(default)]
    pub private_sector: Vec<String>,
    #[serde(default)]
    pub entrepreneurship: Vec<String>,
    #[serde(default)]
    pub competitive_exams: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Roadmap {
    pub id: Uuid,
    pub stream_course: String,
    pub roadmap: RoadmapContent,
}

impl TryFrom<RoadmapRow> for Roadmap {
    type Error = AppError;

    fn try_from(row: RoadmapRow) -> Result<Self, Self::Error> {
        let roadmap = serde_json::from_value(row.roadmap_json).map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "Roadmap {} has malformed roadmap_json: {e}",
                row.stream_course
            ))
        })?;
        Ok(Roadmap {
            id: row.id,
            stream_course: row.stream_course,
            roadmap,
        })
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The five stream roadmaps written to an empty table.
fn sample_roadmaps() -> Vec<(&'static str, RoadmapContent)> {
    vec![
        (
            "MPC",
            RoadmapContent {
                higher_studies: strings(&[
                    "B.Tech (Engineering)",
                    "B.Sc (Physics/Chemistry/Maths)",
                    "B.Arch (Architecture)",
                    "Integrated M.Sc Programs",
                ]),
                government_jobs: strings(&[
                    "ISRO Scientist",
                    "BARC Scientist",
                    "Railway Engineering Services",
                    "State PSU Technical Posts",
                    "UPSC Engineering Services",
                ]),
                private_sector: strings(&[
                    "Software Engineer",
                    "Mechanical Engineer",
                    "Civil Engineer",
                    "Data Scientist",
                    "Product Manager",
                ]),
                entrepreneurship: strings(&[
                    "Tech Startup",
                    "Engineering Consultancy",
                    "Manufacturing Business",
                    "EdTech Platform",
                ]),
                competitive_exams: strings(&[
                    "JEE Main",
                    "JEE Advanced",
                    "BITSAT",
                    "VITEEE",
                    "State CETs",
                ]),
            },
        ),
        (
            "BiPC",
            RoadmapContent {
                higher_studies: strings(&[
                    "MBBS (Medicine)",
                    "BDS (Dental)",
                    "BAMS (Ayurveda)",
                    "B.Pharmacy",
                    "B.Sc Nursing",
                    "Veterinary Science",
                ]),
                government_jobs: strings(&[
                    "Medical Officer",
                    "Staff Nurse",
                    "Lab Technician",
                    "Public Health Officer",
                    "Research Scientist",
                ]),
                private_sector: strings(&[
                    "Hospital Doctor",
                    "Pharmaceutical Industry",
                    "Medical Representative",
                    "Clinical Research",
                    "Biotechnology",
                ]),
                entrepreneurship: strings(&[
                    "Private Clinic",
                    "Diagnostic Center",
                    "Pharmaceutical Business",
                    "Health Tech Startup",
                ]),
                competitive_exams: strings(&["NEET UG", "NEET PG", "GPAT", "JIPMER", "AIIMS"]),
            },
        ),
        (
            "Commerce",
            RoadmapContent {
                higher_studies: strings(&[
                    "B.Com (Commerce)",
                    "BBA (Business Administration)",
                    "B.Sc Economics",
                    "CA (Chartered Accountant)",
                    "CS (Company Secretary)",
                    "CMA (Cost Management)",
                ]),
                government_jobs: strings(&[
                    "Bank PO",
                    "Income Tax Officer",
                    "Customs Officer",
                    "Audit Officer",
                    "Statistical Officer",
                ]),
                private_sector: strings(&[
                    "Accountant",
                    "Financial Analyst",
                    "Business Analyst",
                    "Sales Manager",
                    "HR Executive",
                ]),
                entrepreneurship: strings(&[
                    "Trading Business",
                    "Financial Services",
                    "Consulting Firm",
                    "E-commerce Business",
                ]),
                competitive_exams: strings(&[
                    "CA Foundation",
                    "CS Executive",
                    "CMA Foundation",
                    "Banking Exams",
                ]),
            },
        ),
        (
            "Arts",
            RoadmapContent {
                higher_studies: strings(&[
                    "B.A (Various subjects)",
                    "B.Ed (Education)",
                    "BFA (Fine Arts)",
                    "B.Journalism",
                    "BA LLB (Law)",
                    "B.Social Work",
                ]),
                government_jobs: strings(&[
                    "Teacher",
                    "IAS/IPS Officer",
                    "Translator",
                    "Museum Curator",
                    "Social Worker",
                ]),
                private_sector: strings(&[
                    "Content Writer",
                    "Journalist",
                    "HR Executive",
                    "Event Manager",
                    "NGO Worker",
                ]),
                entrepreneurship: strings(&[
                    "Content Agency",
                    "Event Management",
                    "Art Gallery",
                    "Educational Institute",
                ]),
                competitive_exams: strings(&[
                    "UPSC Civil Services",
                    "State PSC",
                    "NET/JRF",
                    "B.Ed Entrance",
                ]),
            },
        ),
        (
            "B.Tech",
            RoadmapContent {
                higher_studies: strings(&[
                    "M.Tech (Specialization)",
                    "MBA (Management)",
                    "MS (Study Abroad)",
                    "PhD (Research)",
                ]),
                government_jobs: strings(&[
                    "ISRO Engineer",
                    "DRDO Scientist",
                    "Railways Technical",
                    "PSU Engineer",
                    "Government IT",
                ]),
                private_sector: strings(&[
                    "Software Developer",
                    "System Engineer",
                    "Project Manager",
                    "Technical Consultant",
                    "Product Engineer",
                ]),
                entrepreneurship: strings(&[
                    "Tech Startup",
                    "Software Company",
                    "Hardware Manufacturing",
                    "Consulting Services",
                ]),
                competitive_exams: strings(&["GATE", "CAT", "GRE", "UPSC ESE"]),
            },
        ),
    ]
}

pub async fn list_roadmaps(pool: &PgPool) -> Result<Vec<RoadmapRow>, sqlx::Error> {
    sqlx::query_as::<_, RoadmapRow>("SELECT * FROM roadmaps ORDER BY stream_course")
        .fetch_all(pool)
        .await
}

pub async fn fetch_roadmap(
    pool: &PgPool,
    stream_course: &str,
) -> Result<Option<RoadmapRow>, sqlx::Error> {
    sqlx::query_as::<_, RoadmapRow>("SELECT * FROM roadmaps WHERE lower(stream_course) = lower($1)")
        .bind(stream_course)
        .fetch_optional(pool)
        .await
}

async fn seed_sample_roadmaps(pool: &PgPool) -> Result<(), AppError> {
    let roadmaps = sample_roadmaps();
    let mut tx = pool.begin().await?;
    for (stream_course, content) in &roadmaps {
        let roadmap_json = serde_json::to_value(content)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize roadmap: {e}")))?;

        sqlx::query(
            "INSERT INTO roadmaps (stream_course, roadmap_json) VALUES ($1, $2) ON CONFLICT (stream_course) DO NOTHING",
        )
        .bind(*stream_course)
        .bind(roadmap_json)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    info!("Seeded {} sample roadmaps", roadmaps.len());
    Ok(())
}

/// GET /api/v1/roadmaps
pub async fn handle_list_roadmaps(
    State(state): State<AppState>,
) -> Result<Json<Vec<Roadmap>>, AppError> {
    let mut rows = list_roadmaps(&state.db).await?;
    if rows.is_empty() {
        seed_sample_roadmaps(&state.db).await?;
        rows = list_roadmaps(&state.db).await?;
    }

    let roadmaps = rows
        .into_iter()
        .map(Roadmap::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(roadmaps))
}

/// GET /api/v1/roadmaps/:stream_course
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(stream_course): Path<String>,
) -> Result<Json<Roadmap>, AppError> {
    let row = fetch_roadmap(&state.db, &stream_course)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Roadmap {stream_course} not found")))?;
    Ok(Json(Roadmap::try_from(row)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_with_partial_json_defaults_missing_lists() {
        let row = RoadmapRow {
            id: Uuid::new_v4(),
            stream_course: "BiPC".to_string(),
            roadmap_json: json!({"higher_studies": ["MBBS"]}),
        };
        let roadmap = Roadmap::try_from(row).unwrap();
        assert_eq!(roadmap.roadmap.higher_studies, vec!["MBBS"]);
        assert!(roadmap.roadmap.competitive_exams.is_empty());
    }

    #[test]
    fn test_malformed_roadmap_json_is_rejected() {
        let row = RoadmapRow {
            id: Uuid::new_v4(),
            stream_course: "MPC".to_string(),
            roadmap_json: json!({"higher_studies": "B.Tech"}),
        };
        assert!(Roadmap::try_from(row).is_err());
    }

    #[test]
    fn test_private_sector_survives_row_conversion() {
        let row = RoadmapRow {
            id: Uuid::new_v4(),
            stream_course: "Commerce".to_string(),
            roadmap_json: json!({
                "higher_studies": ["B.Com (Commerce)"],
                "private_sector": ["Accountant", "Financial Analyst"]
            }),
        };
        let roadmap = Roadmap::try_from(row).unwrap();
        assert_eq!(roadmap.roadmap.private_sector, vec!["Accountant", "Financial Analyst"]);

        let body = serde_json::to_value(&roadmap).unwrap();
        assert_eq!(body["roadmap"]["private_sector"][1], "Financial Analyst");
    }

    #[test]
    fn test_seeds_five_stream_roadmaps() {
        let streams: Vec<_> = sample_roadmaps().into_iter().map(|(s, _)| s).collect();
        assert_eq!(streams, ["MPC", "BiPC", "Commerce", "Arts", "B.Tech"]);
    }

    #[test]
    fn test_mpc_roadmap_lists_engineering_entrances() {
        let (_, mpc) = sample_roadmaps().into_iter().find(|(s, _)| *s == "MPC").unwrap();
        assert_eq!(
            mpc.competitive_exams,
            ["JEE Main", "JEE Advanced", "BITSAT", "VITEEE", "State CETs"]
        );
        assert_eq!(
            mpc.government_jobs,
            [
                "ISRO Scientist",
                "BARC Scientist",
                "Railway Engineering Services",
                "State PSU Technical Posts",
                "UPSC Engineering Services",
            ]
        );
        assert_eq!(mpc.private_sector[0], "Software Engineer");
        assert_eq!(mpc.entrepreneurship.last().map(String::as_str), Some("EdTech Platform"));
    }

    #[test]
    fn test_btech_roadmap_keeps_postgraduate_exams() {
        let (_, btech) = sample_roadmaps().into_iter().find(|(s, _)| *s == "B.Tech").unwrap();
        assert_eq!(btech.competitive_exams, ["GATE", "CAT", "GRE", "UPSC ESE"]);
        assert_eq!(btech.private_sector.len(), 5);
    }

    #[test]
    fn test_every_seeded_roadmap_fills_all_sections() {
        for (stream, content) in sample_roadmaps() {
            for (section, items) in [
                ("higher_studies", &content.higher_studies),
                ("government_jobs", &content.government_jobs),
                ("private_sector", &content.private_sector),
                ("entrepreneurship", &content.entrepreneurship),
                ("competitive_exams", &content.competitive_exams),
            ] {
                assert!(!items.is_empty(), "{stream} has no {section}");
            }
        }
    }
}
