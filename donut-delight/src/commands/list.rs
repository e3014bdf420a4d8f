//! List page commands: view, chomp, reset
//!
//! Each invocation is one page load: fetch the catalog, reconcile the session
//! state against it, apply the user action, render.

use crate::core::{ManagerError, ManagerResult, OrderManager, SessionStore};
use crate::pages::list;
use donut_client::{CatalogLoader, CatalogSource, RetryPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    View,
    Chomp(u64),
    Reset,
}

/// Load the catalog and render the list after applying `action`
///
/// A failed load renders the error message; session state is left untouched.
pub async fn run<C, S>(
    source: C,
    store: S,
    retry: &RetryPolicy,
    action: ListAction,
) -> ManagerResult<String>
where
    C: CatalogSource,
    S: SessionStore,
{
    let mut loader = CatalogLoader::new(source);
    if loader.load_with_retry(retry).await.is_err() {
        return Ok(list::render::<S>(loader.state(), None));
    }

    let catalog = loader.state().items().unwrap_or_default();
    let mut manager = OrderManager::initialize(store, catalog)?;
    let notice = apply(&mut manager, action)?;

    let page = list::render(loader.state(), Some(&manager));
    Ok(match notice {
        Some(notice) => format!("{notice}\n\n{page}"),
        None => page,
    })
}

/// Apply a user action, returning a one-line notice for the user
pub fn apply<S: SessionStore>(
    manager: &mut OrderManager<S>,
    action: ListAction,
) -> ManagerResult<Option<String>> {
    let notice = match action {
        ListAction::View => None,
        ListAction::Chomp(id) => {
            let name = manager
                .items()
                .iter()
                .find(|item| item.id == id)
                .map(|item| item.name.clone());
            match (manager.select(id), name) {
                (Ok(true), Some(name)) => Some(format!("Chomped {name}!")),
                (Ok(false), Some(name)) => Some(format!("{name} is already chomped.")),
                (Err(ManagerError::UnknownItem(id)), _) => Some(format!("No donut with id {id}.")),
                (Err(e), _) => return Err(e),
                (Ok(_), None) => None,
            }
        }
        ListAction::Reset => {
            if manager.has_selection() {
                manager.reset()?;
                Some("Selection cleared.".to_string())
            } else {
                Some("Nothing to reset.".to_string())
            }
        }
    };
    Ok(notice)
}
