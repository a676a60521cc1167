//! Table rendering for operation results.

use std::collections::BTreeMap;

use comfy_table::{
    ContentArrangement, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL_CONDENSED,
};
use drover::pkg::{ChangeSet, PackageListing};

fn base_table(header: Vec<&'static str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub(crate) fn change_set_table(changes: &ChangeSet) -> Table {
    let mut table = base_table(vec!["Package", "Old", "New"]);
    for (name, change) in changes {
        table.add_row(vec![name, &change.old, &change.new]);
    }
    table
}

pub(crate) fn version_map_table(versions: &BTreeMap<String, String>) -> Table {
    let mut table = base_table(vec!["Package", "Version"]);
    for (name, version) in versions {
        table.add_row(vec![name, version]);
    }
    table
}

pub(crate) fn listing_table(listing: &PackageListing) -> Table {
    let mut table = base_table(vec!["Package", "Version"]);
    match listing {
        PackageListing::Joined(map) => {
            for (name, version) in map {
                table.add_row(vec![name, version]);
            }
        }
        PackageListing::Lists(map) => {
            for (name, versions) in map {
                table.add_row(vec![name.clone(), versions.join("\n")]);
            }
        }
    }
    table
}
