//! Integration smoke tests for `sap_chart`

use sap_chart::core::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
