use crate::store::StoreHandle;

pub const NO_HANDLE: &str = "Error: Unable to modify favorites.";
pub const EMPTY: &str = "No favorites yet!";

/// Favorites list. Without a store handle the screen cannot offer removal and
/// shows a static error instead.
pub async fn render(store: Option<&StoreHandle>) -> String {
    let Some(store) = store else {
        return format!("{}\n", NO_HANDLE);
    };

    let state = store.read().await;
    if state.favorites.is_empty() {
        return format!("{}\n", EMPTY);
    }
    let favorites = state.favorite_properties();

    let mut out = String::from("--- Favorites ---\n");
    for property in favorites {
        out.push_str(&format!(
            "  [{}] ♥ {} {}  (open {} | unfav {})\n",
            property.id, property.title, property.price, property.id, property.id
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed::featured_properties, Catalog};
    use crate::store::AppState;

    fn store() -> StoreHandle {
        StoreHandle::new(AppState::new(
            Catalog::from_properties(featured_properties()).unwrap(),
        ))
    }

    #[tokio::test]
    async fn missing_handle_renders_error() {
        assert_eq!(render(None).await.trim(), NO_HANDLE);
    }

    #[tokio::test]
    async fn empty_favorites_message() {
        let store = store();
        assert_eq!(render(Some(&store)).await.trim(), EMPTY);
    }

    #[tokio::test]
    async fn lists_live_favorites() {
        let store = store();
        store.toggle_favorite("3").await.unwrap();
        store.toggle_favorite("1").await.unwrap();

        let text = render(Some(&store)).await;
        let loft = text.find("Downtown Loft").unwrap();
        let nyc = text.find("Luxury Apartment in NYC").unwrap();
        assert!(loft < nyc);

        store.remove_favorite("3").await;
        assert!(!render(Some(&store)).await.contains("Downtown Loft"));
    }
}
