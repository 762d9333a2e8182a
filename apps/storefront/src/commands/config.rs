//! # Config Commands
//!
//! Commands for retrieving storefront configuration.

use tracing::debug;

use crate::state::ConfigState;
use crate::Storefront;

/// Gets the current storefront configuration.
///
/// ## When Used
/// - Page header (store name)
/// - Currency formatting
/// - Deciding whether to prompt for sign-in before cart actions
pub fn get_config(store: &Storefront) -> ConfigState {
    debug!("get_config command");
    store.config().clone()
}
