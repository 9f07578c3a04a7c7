use crate::command::{Command, HELP};
use crate::feed::FilterOptions;
use crate::map::{self, MapMarker, Region};
use crate::navigation::{Navigator, Route};
use crate::screens::{self, contact, detail, home, ContactForm};
use crate::store::StoreHandle;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// What the session loop should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Render(String),
    Quit,
}

/// Navigation root: owns the store, the screen stack and the contact form
pub struct App {
    store: StoreHandle,
    navigator: Navigator,
    contact: ContactForm,
}

impl App {
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            navigator: Navigator::new(),
            contact: ContactForm::default(),
        }
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    /// Parse and run one input line. Blank lines and `#` comments are skipped.
    pub async fn handle_line(&mut self, line: &str) -> Result<Option<Outcome>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let command: Command = line.parse()?;
        debug!("Command: {:?}", command);
        self.handle(command).await.map(Some)
    }

    pub async fn handle(&mut self, command: Command) -> Result<Outcome> {
        let outcome = self.dispatch(command).await;
        self.drop_unmounted_form();
        outcome
    }

    /// The contact form only lives while its screen is on the stack
    fn drop_unmounted_form(&mut self) {
        if !self.navigator.contains(&Route::Contact) && self.contact != ContactForm::default() {
            debug!("Contact screen closed, discarding form input");
            self.contact = ContactForm::default();
        }
    }

    async fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        let text = match command {
            Command::List => {
                self.navigator.pop_to_root();
                self.render_current().await
            }
            Command::Search(query) => {
                self.store.set_query(&query).await;
                self.navigator.pop_to_root();
                self.render_current().await
            }
            Command::Filter(criteria) => {
                self.store.apply_filters(criteria).await;
                self.navigator.pop_to_root();
                self.render_current().await
            }
            Command::Clear => {
                self.store.clear().await;
                self.navigator.pop_to_root();
                self.render_current().await
            }
            Command::Options => render_options(&FilterOptions::default()),
            Command::Open(id) => {
                let property = self.store.property(&id).await?;
                self.navigator.navigate(Route::PropertyDetail(Box::new(property)));
                self.render_current().await
            }
            Command::Favorite(id) => {
                self.store.toggle_favorite(&id).await?;
                self.render_current().await
            }
            Command::Unfavorite(id) => {
                self.store.remove_favorite(&id).await;
                self.render_current().await
            }
            Command::Favorites => {
                self.navigator.navigate(Route::Favorites);
                self.render_current().await
            }
            Command::Map => self.render_map().await,
            Command::Contact => {
                if self.navigator.current() != &Route::Contact {
                    self.navigator.navigate(Route::Contact);
                }
                self.render_current().await
            }
            Command::Set(field, value) => {
                if self.navigator.current() != &Route::Contact {
                    return Ok(Outcome::Render(
                        "Open the contact form first with 'contact'.\n".to_string(),
                    ));
                }
                self.contact.set(field, &value);
                self.contact.render()
            }
            Command::Submit => {
                if self.navigator.current() != &Route::Contact {
                    return Ok(Outcome::Render(
                        "Open the contact form first with 'contact'.\n".to_string(),
                    ));
                }
                let sent = self.contact.submit();
                format!(
                    "{} ({})\n\n{}",
                    contact::CONFIRMATION,
                    sent.sent_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    self.contact.render()
                )
            }
            Command::ContactAgent => match self.navigator.current() {
                Route::PropertyDetail(property) => {
                    let inquiry = detail::agent_inquiry(property);
                    info!("{}", inquiry);
                    format!("{}\n", inquiry)
                }
                _ => "Open a listing first with 'open <id>'.\n".to_string(),
            },
            Command::Export(path) => self.export(&path).await?,
            Command::Back => {
                self.navigator.back();
                self.render_current().await
            }
            Command::Help => format!("{}\n", HELP),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Render(text))
    }

    pub async fn render_current(&self) -> String {
        match self.navigator.current() {
            Route::Home => home::render(&*self.store.read().await),
            Route::PropertyDetail(property) => {
                let is_favorite = self.store.read().await.favorites.contains(&property.id);
                detail::render(property, is_favorite)
            }
            Route::Favorites => screens::favorites::render(Some(&self.store)).await,
            Route::Contact => self.contact.render(),
        }
    }

    async fn render_map(&self) -> String {
        match self.navigator.current() {
            Route::PropertyDetail(property) => map::render(
                &Region::around(property),
                &[MapMarker::from(&**property)],
            ),
            _ => {
                let state = self.store.read().await;
                let markers = map::markers(state.visible());
                map::render(&Region::home(), &markers)
            }
        }
    }

    /// Write the current feed view as pretty JSON
    async fn export(&self, path: &Path) -> Result<String> {
        let json = {
            let state = self.store.read().await;
            serde_json::to_string_pretty(&state.visible())?
        };
        tokio::fs::write(path, &json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        let count = self.store.read().await.visible().len();
        info!("💾 Saved {} properties to {}", count, path.display());
        Ok(format!("💾 Saved {} properties to {}\n", count, path.display()))
    }
}

fn render_options(options: &FilterOptions) -> String {
    let mut out = String::from("Apply Filters\n\nPrice Range (price=)\n  any\n");
    for range in &options.price_ranges {
        let syntax = match range.max {
            Some(max) => format!("{}-{}", range.min, max),
            None => format!("{}+", range.min),
        };
        out.push_str(&format!("  {:<24} {}\n", syntax, range));
    }
    out.push_str("\nProperty Type (type=)\n  any\n");
    for kind in &options.property_types {
        out.push_str(&format!("  {}\n", kind));
    }
    out.push_str("\nBedrooms (beds=)\n  any\n");
    for beds in &options.bedrooms {
        out.push_str(&format!("  {} Bedrooms\n", beds));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed::featured_properties, Catalog};
    use crate::error::CatalogError;
    use crate::store::AppState;

    fn app() -> App {
        let catalog = Catalog::from_properties(featured_properties()).unwrap();
        App::new(StoreHandle::new(AppState::new(catalog)))
    }

    async fn run(app: &mut App, line: &str) -> String {
        match app.handle_line(line).await.unwrap() {
            Some(Outcome::Render(text)) => text,
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[tokio::test]
    async fn search_then_filter_keeps_both() {
        let mut app = app();
        run(&mut app, "search a").await;
        let text = run(&mut app, "filter price=1000000+").await;

        assert!(text.contains("Luxury Apartment in NYC"));
        assert!(text.contains("Beachfront Villa"));
        assert!(!text.contains("[3]"));
        assert!(text.contains("Search: a"));
    }

    #[tokio::test]
    async fn miami_search_shows_only_the_villa() {
        let mut app = app();
        let text = run(&mut app, "search miami").await;
        assert!(text.contains("[2] ♡ Beachfront Villa"));
        assert!(!text.contains("[1]"));
        assert!(!text.contains("[3]"));
    }

    #[tokio::test]
    async fn detail_favorites_and_back() {
        let mut app = app();
        let text = run(&mut app, "open 1").await;
        assert!(text.contains("Property Details"));

        let text = run(&mut app, "fav 1").await;
        assert!(text.contains("♥ Luxury Apartment in NYC"));

        let text = run(&mut app, "contact-agent").await;
        assert_eq!(text.trim(), "Contacting agent for Luxury Apartment in NYC");

        run(&mut app, "back").await;
        assert_eq!(app.current_route(), &Route::Home);

        let text = run(&mut app, "favorites").await;
        assert!(text.contains("Luxury Apartment in NYC"));

        let text = run(&mut app, "unfav 1").await;
        assert!(text.contains("No favorites yet!"));
    }

    #[tokio::test]
    async fn unknown_listing_is_an_error() {
        let mut app = app();
        let err = app.handle_line("open 9").await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::UnknownProperty("9".to_string()))
        );
        assert_eq!(app.current_route(), &Route::Home);
    }

    #[tokio::test]
    async fn contact_form_round() {
        let mut app = app();
        let text = run(&mut app, "set name Ada").await;
        assert!(text.contains("contact form first"));

        run(&mut app, "contact").await;
        run(&mut app, "set name Ada").await;
        run(&mut app, "set email ada@example.com").await;
        let text = run(&mut app, "submit").await;
        assert!(text.starts_with(contact::CONFIRMATION));
        assert!(text.lines().next().unwrap().ends_with(" UTC)"));
        assert!(text.contains("<Enter your name>"));
    }

    #[tokio::test]
    async fn leaving_contact_discards_typed_input() {
        let mut app = app();
        run(&mut app, "contact").await;
        run(&mut app, "set name Ada").await;
        run(&mut app, "back").await;
        let text = run(&mut app, "contact").await;
        assert!(text.contains("<Enter your name>"));
        assert!(!text.contains("Ada"));

        run(&mut app, "set email ada@example.com").await;
        run(&mut app, "search loft").await;
        let text = run(&mut app, "contact").await;
        assert!(text.contains("<Enter your email>"));
    }

    #[tokio::test]
    async fn switching_screens_does_not_grow_the_stack() {
        let mut app = app();
        for _ in 0..10 {
            run(&mut app, "favorites").await;
            run(&mut app, "open 1").await;
            run(&mut app, "open 2").await;
        }
        run(&mut app, "back").await;
        assert_eq!(app.current_route(), &Route::Favorites);
        run(&mut app, "back").await;
        assert_eq!(app.current_route(), &Route::Home);
    }

    #[tokio::test]
    async fn export_writes_current_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.json");
        let mut app = app();

        run(&mut app, "filter type=loft").await;
        let text = run(&mut app, &format!("export {}", path.display())).await;
        assert!(text.contains("Saved 1 properties"));

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<crate::models::Property> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "Downtown Loft");
    }

    #[tokio::test]
    async fn blank_lines_and_quit() {
        let mut app = app();
        assert_eq!(app.handle_line("   ").await.unwrap(), None);
        assert_eq!(app.handle_line("# note").await.unwrap(), None);
        assert_eq!(app.handle_line("quit").await.unwrap(), Some(Outcome::Quit));
        assert!(app.handle_line("fly").await.is_err());
    }

    #[tokio::test]
    async fn map_follows_the_screen() {
        let mut app = app();
        let text = run(&mut app, "map").await;
        assert!(text.contains("(37.7749, -122.4194)"));
        assert_eq!(text.lines().count(), 4);

        run(&mut app, "open 3").await;
        let text = run(&mut app, "map").await;
        assert!(text.contains("(34.0522, -118.2437)"));
        assert_eq!(text.lines().count(), 2);
    }

    #[tokio::test]
    async fn options_list_presets() {
        let mut app = app();
        let text = run(&mut app, "options").await;
        assert!(text.contains("1000000+"));
        assert!(text.contains("Above $1,000,000"));
        assert!(text.contains("5 Bedrooms"));
    }
}
