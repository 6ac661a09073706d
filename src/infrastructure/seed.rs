use crate::entities::{media_items, prelude::*};
use crate::models::ItemKind;
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set, TransactionTrait};
use tracing::info;

/// One row of the fixed sample catalog.
#[derive(Debug, Clone, Copy)]
pub struct SampleItem {
    pub file_name: &'static str,
    pub kind: ItemKind,
    pub file_ext: &'static str,
    pub access_url: &'static str,
    pub file_size_kb: i32,
    pub created_at: &'static str,
}

impl SampleItem {
    pub fn created_at(&self) -> anyhow::Result<DateTime<Utc>> {
        Ok(self.created_at.parse::<DateTime<Utc>>()?)
    }

    fn to_active_model(self) -> anyhow::Result<media_items::ActiveModel> {
        Ok(media_items::ActiveModel {
            file_name: Set(self.file_name.to_string()),
            file_type: Set(self.kind.as_str().to_string()),
            file_ext: Set(self.file_ext.to_string()),
            access_url: Set(self.access_url.to_string()),
            file_size_kb: Set(self.file_size_kb),
            created_at: Set(self.created_at()?),
            ..Default::default()
        })
    }
}

const fn image(
    file_name: &'static str,
    access_url: &'static str,
    file_size_kb: i32,
    created_at: &'static str,
) -> SampleItem {
    SampleItem {
        file_name,
        kind: ItemKind::Image,
        file_ext: "png",
        access_url,
        file_size_kb,
        created_at,
    }
}

const fn document(
    file_name: &'static str,
    file_ext: &'static str,
    access_url: &'static str,
    file_size_kb: i32,
    created_at: &'static str,
) -> SampleItem {
    SampleItem {
        file_name,
        kind: ItemKind::Document,
        file_ext,
        access_url,
        file_size_kb,
        created_at,
    }
}

const SAMPLE_ITEMS: &[SampleItem] = &[
    // Lecture slides and problem sets (MIT 6.0001)
    image("lec01_slide01_welcome.png", "/images/lec01_slide01_welcome.png", 312, "2026-02-24T10:00:00Z"),
    image("lec01_slide03_goals.png", "/images/lec01_slide03_goals.png", 485, "2026-02-24T10:05:00Z"),
    image("lec01_slide11_numerical_example.png", "/images/lec01_slide11_numerical_example.png", 445, "2026-02-24T10:11:00Z"),
    image("lec01_slide15_declarative_knowledge.png", "/images/lec01_slide15_declarative_knowledge.png", 398, "2026-02-24T10:15:00Z"),
    image("lec01_slide16_imperative_knowledge.png", "/images/lec01_slide16_imperative_knowledge.png", 412, "2026-02-24T10:16:00Z"),
    image("lec02_slide05_bindings.png", "/images/lec02_slide05_bindings.png", 356, "2026-02-25T09:00:00Z"),
    image("lec02_slide12_strings.png", "/images/lec02_slide12_strings.png", 402, "2026-02-25T09:15:00Z"),
    image("lec03_slide08_iteration.png", "/images/lec03_slide08_iteration.png", 478, "2026-02-26T14:30:00Z"),
    image("lec03_slide14_for_loops.png", "/images/lec03_slide14_for_loops.png", 421, "2026-02-26T14:45:00Z"),
    image("pset1_ps1a.png", "/images/pset1_ps1a.png", 654, "2026-02-27T08:00:00Z"),
    image("lec01_slide18_aspects_of_languages.png", "/images/lec01_slide18_aspects_of_languages.png", 482, "2026-02-27T10:25:00Z"),
    image("pset3_document_distance.png", "/images/pset3_document_distance.png", 745, "2026-02-27T11:00:00Z"),
    // Office documents
    document("2024年春季项目总结报告.pdf", "pdf", "/docs/2024_spring_report.pdf", 4502, "2026-02-22T09:12:00Z"),
    document("第一季度财务审计报表.xlsx", "xlsx", "/docs/q1_financial_audit.xlsx", 1240, "2026-02-20T14:30:00Z"),
    document("产品需求文档_V2.1.docx", "docx", "/docs/prd_v2.1.docx", 358, "2026-02-18T11:45:00Z"),
    document("关于加强网络安全的通知.pdf", "pdf", "/docs/security_notice.pdf", 189, "2026-02-15T08:20:00Z"),
    document("员工入职培训手册_最终版.pdf", "pdf", "/docs/onboarding_manual.pdf", 8900, "2026-02-10T16:00:00Z"),
    document("客户对接沟通记录_张总.docx", "docx", "/docs/client_meeting_zhang.docx", 45, "2026-02-05T10:15:00Z"),
    document("2023年度运营数据盘点.xlsx", "xlsx", "/docs/2023_operations_data.xlsx", 4560, "2026-01-20T13:40:00Z"),
    document("技术部团建活动策划方案.docx", "docx", "/docs/team_building_plan.docx", 120, "2026-01-15T09:00:00Z"),
    document("服务器架构升级评估.pdf", "pdf", "/docs/server_arch_upgrade.pdf", 3400, "2026-01-10T11:20:00Z"),
    document("竞品分析调研表格.xlsx", "xlsx", "/docs/competitor_analysis.xlsx", 890, "2026-01-05T15:10:00Z"),
];

/// The fixed dataset inserted into an empty catalog.
pub fn sample_items() -> &'static [SampleItem] {
    SAMPLE_ITEMS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    AlreadyInitialized { existing: u64 },
    Seeded { images: usize, documents: usize },
}

/// Populates an empty catalog with the sample rows. A catalog holding any row is
/// left untouched. All rows commit together or not at all.
pub async fn seed_sample_data(db: &DatabaseConnection) -> anyhow::Result<SeedOutcome> {
    info!("🌱 Seeding sample catalog...");

    let rows = SAMPLE_ITEMS
        .iter()
        .map(|item| item.to_active_model())
        .collect::<anyhow::Result<Vec<_>>>()?;

    let txn = db.begin().await?;

    let existing = MediaItems::find().count(&txn).await?;
    if existing > 0 {
        txn.rollback().await?;
        info!("Catalog already holds {} rows, skipping sample insert.", existing);
        return Ok(SeedOutcome::AlreadyInitialized { existing });
    }

    MediaItems::insert_many(rows).exec(&txn).await?;
    txn.commit().await?;

    let images = SAMPLE_ITEMS
        .iter()
        .filter(|i| i.kind == ItemKind::Image)
        .count();
    let documents = SAMPLE_ITEMS.len() - images;

    info!("✅ Seeding completed: {} rows committed.", images + documents);
    Ok(SeedOutcome::Seeded { images, documents })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_counts() {
        let images = sample_items()
            .iter()
            .filter(|i| i.kind == ItemKind::Image)
            .count();
        let docs = sample_items()
            .iter()
            .filter(|i| i.kind == ItemKind::Document)
            .count();
        assert_eq!(images, 12);
        assert_eq!(docs, 10);
    }

    #[test]
    fn test_sample_rows_are_well_formed() {
        let mut names = HashSet::new();
        for item in sample_items() {
            assert!(names.insert(item.file_name), "duplicate {}", item.file_name);
            assert!(item.created_at().is_ok(), "bad timestamp {}", item.created_at);
            assert!(item.file_size_kb >= 0);
            assert!(item.file_name.ends_with(item.file_ext));
        }
    }
}
