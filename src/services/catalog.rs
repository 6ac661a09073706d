use crate::api::error::AppError;
use crate::entities::{media_items, prelude::*};
use crate::models::{ArchivePage, ItemKind, MediaItemResponse, PageRequest};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

/// Read side of the catalog.
#[derive(Clone)]
pub struct CatalogService {
    db: DatabaseConnection,
}

impl CatalogService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Newest-first page of items of one kind. Rows sharing a timestamp are ordered
    /// by id, highest first.
    pub async fn list(&self, kind: ItemKind, page: PageRequest) -> Result<ArchivePage, AppError> {
        // Count and slice must observe the same snapshot.
        let txn = self.db.begin().await?;

        let select = MediaItems::find().filter(media_items::Column::FileType.eq(kind.as_str()));

        let total = select.clone().count(&txn).await?;

        let rows = select
            .order_by_desc(media_items::Column::CreatedAt)
            .order_by_desc(media_items::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&txn)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            kind = %kind,
            page = page.page,
            page_size = page.page_size,
            total,
            returned = rows.len(),
            "archive page loaded"
        );

        Ok(ArchivePage {
            items: rows.into_iter().map(MediaItemResponse::from).collect(),
            total,
            has_more: page.has_more(total),
        })
    }
}
