use std::sync::OnceLock;

use mac_oui::Oui;
use tracing::warn;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Retrieves or initializes the **Organizationally unique identifier**
/// database.
///
/// A dataset that fails to load stays unavailable for the rest of the run;
/// lookups then resolve nothing instead of failing the scan.
fn oui_db() -> Option<&'static Oui> {
    OUI_DB
        .get_or_init(|| match Oui::default() {
            Ok(db) => Some(db),
            Err(e) => {
                warn!("could not load OUI database: {e}");
                None
            }
        })
        .as_ref()
}

/// Resolves hardware vendors for MAC addresses.
pub trait VendorProvider {
    /// Returns the vendor name, or `None` when the prefix is unknown, the
    /// address is malformed, or the dataset is unavailable.
    fn vendor(&self, mac: &str) -> Option<String>;
}

/// Vendor lookups against the embedded OUI dataset.
pub struct MacOuiRepo;

impl VendorProvider for MacOuiRepo {
    fn vendor(&self, mac: &str) -> Option<String> {
        match oui_db()?.lookup_by_mac(mac) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            _ => None,
        }
    }
}
