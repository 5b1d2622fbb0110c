use std::sync::Arc;

use anyhow::Result;
use models::ProductDraft;
use service::inventory::{InventoryStore, SlotPersistence};
use service::storage::{FileSlotStorage, SlotStorage};
use uuid::Uuid;

fn tmp_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("inventory_flow_{}", Uuid::new_v4()))
}

async fn open(dir: &std::path::Path) -> Result<Arc<InventoryStore>> {
    let storage = Arc::new(FileSlotStorage::new(dir));
    Ok(InventoryStore::open(SlotPersistence::new(storage, "products")).await?)
}

#[tokio::test]
async fn widget_gadget_scenario() -> Result<()> {
    let dir = tmp_dir();
    let store = open(&dir).await?;

    let widget = store.create(ProductDraft::new("Widget", "9.99", "3")).await?;
    let list = store.list().await;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].price, 9.99);
    assert_eq!(list[0].quantity, 3);
    assert_eq!(list[0].description, None);

    let gadget = store.create(ProductDraft::new("Gadget", "4", "10").with_description("small")).await?;
    let names: Vec<String> = store.list().await.into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["Gadget", "Widget"]);

    store.delete(&widget.id).await?;
    assert_eq!(store.list().await, vec![gadget]);

    let _ = tokio::fs::remove_dir_all(&dir).await;
    Ok(())
}

#[tokio::test]
async fn collection_survives_reopen() -> Result<()> {
    let dir = tmp_dir();
    {
        let store = open(&dir).await?;
        let a = store.create(ProductDraft::new("Red Mug", "3.5", "2")).await?;
        store.create(ProductDraft::new("Blue Cup", "2", "5").with_description("ceramic")).await?;
        store.update(&a.id, ProductDraft::new("Red Mug XL", "4.25", "1")).await?;
    }

    let reopened = open(&dir).await?;
    let list = reopened.list().await;
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, "Blue Cup");
    assert_eq!(list[0].description.as_deref(), Some("ceramic"));
    assert_eq!(list[1].name, "Red Mug XL");
    assert_eq!(list[1].price, 4.25);
    assert_eq!(reopened.search("xl").await, vec![list[1].clone()]);

    let _ = tokio::fs::remove_dir_all(&dir).await;
    Ok(())
}

#[tokio::test]
async fn corrupt_file_starts_empty_and_is_replaced() -> Result<()> {
    let dir = tmp_dir();
    let storage = FileSlotStorage::new(&dir);
    storage.write("products", "{\"truncated\": [".into()).await?;

    let store = open(&dir).await?;
    assert!(store.list().await.is_empty());

    store.create(ProductDraft::new("Widget", "1", "1")).await?;
    let raw = storage.read("products").await?.unwrap_or_default();
    let parsed: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(parsed.as_array().map(Vec::len), Some(1));

    let _ = tokio::fs::remove_dir_all(&dir).await;
    Ok(())
}
