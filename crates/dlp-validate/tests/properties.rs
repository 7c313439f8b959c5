//! Properties that hold for arbitrary grids.

mod common;

use std::sync::Arc;

use common::{CountingFetcher, engine};
use dlp_model::{Grid, Location};
use dlp_profiles::Profiles;
use dlp_validate::{Registry, RuleBook, ValidatorContext};
use proptest::prelude::*;

const HEADERS: &[&str] = &[
    "Item ARK",
    "Parent ARK",
    "Object Type",
    "Item Sequence",
    "Visibility",
    "Title",
    "File Name",
    "License",
    "Type.typeOfResource",
    "media.height",
];

const VALUES: &[&str] = &[
    "",
    " ",
    "ark:/21198/abc",
    "ark:/123/",
    "Work",
    "Page",
    "Collection",
    "mov",
    "7",
    "-1",
    "open",
    "two\nlines",
    "caf\u{FFFD}",
    "https://good.example.org/x",
    "https://bad.example.org/x",
    "Masters/a b.tif",
];

fn arb_grid() -> impl Strategy<Value = Grid> {
    let header = proptest::sample::subsequence(HEADERS.to_vec(), 1..=HEADERS.len()).prop_shuffle();
    header.prop_flat_map(|header| {
        let width = header.len();
        let row = proptest::collection::vec(proptest::sample::select(VALUES.to_vec()), 0..=width + 1);
        proptest::collection::vec(row, 0..6).prop_map(move |rows| {
            let mut all = vec![header.iter().map(|h| (*h).to_owned()).collect::<Vec<_>>()];
            all.extend(rows.into_iter().map(|row| row.into_iter().map(str::to_owned).collect()));
            Grid::new(all)
        })
    })
}

proptest! {
    #[test]
    fn validation_is_deterministic(grid in arb_grid(), profile in proptest::sample::select(vec!["default", "fester", "test", "bucketeer"])) {
        let engine = engine(Arc::new(CountingFetcher::default()));
        let first = engine.validate(profile, &grid).unwrap();
        let second = engine.validate(profile, &grid).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_validator_reports_out_of_bounds(grid in arb_grid(), row_pad in 0usize..3, col in 0usize..20) {
        let context = ValidatorContext::new(Arc::new(Profiles::new()), Arc::new(RuleBook::builtin().unwrap()))
            .with_fetcher(Arc::new(CountingFetcher::default()));
        let validators = Registry::new(context).validators::<&str>(&[]);
        let outside = Location::new(grid.row_count() + row_pad, col);

        for (name, check) in validators.iter() {
            let violations = check.validate("default", outside, &grid);
            prop_assert_eq!(violations.len(), 1, "{} returned {:?}", name, violations);
            prop_assert_eq!(violations.first().unwrap().location(), outside);
        }
    }
}
