//! Property tests for input -> output path mapping.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use rasterpack::{PathMapper, DENSITIES};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_-]{1,12}").unwrap()
}

fn relative_source() -> impl Strategy<Value = PathBuf> {
    (proptest::collection::vec(segment(), 0..=4), segment()).prop_map(|(dirs, stem)| {
        let mut path: PathBuf = dirs.iter().collect();
        path.push(format!("{stem}.svg"));
        path
    })
}

fn mapper() -> PathMapper {
    PathMapper::with_base("icons/svg", "build/png", Path::new("/work"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Mapping is a pure function of its inputs.
    #[test]
    fn property_mapping_is_deterministic(rel in relative_source()) {
        let source = Path::new("icons/svg").join(&rel);
        let a = mapper().all_output_paths(&source).unwrap();
        let b = mapper().all_output_paths(&source).unwrap();
        prop_assert_eq!(a, b);
    }

    /// PROPERTY: Every density gets its own path, in the density folder, with the
    /// relative directory and stem preserved.
    #[test]
    fn property_outputs_mirror_relative_path(rel in relative_source()) {
        let source = Path::new("icons/svg").join(&rel);
        let outputs = mapper().all_output_paths(&source).unwrap();

        prop_assert_eq!(outputs.len(), DENSITIES.len());
        let unique: HashSet<_> = outputs.iter().collect();
        prop_assert_eq!(unique.len(), DENSITIES.len());

        for (density, output) in DENSITIES.iter().zip(&outputs) {
            let expected = Path::new("build/png")
                .join(density.label())
                .join(rel.with_extension("png"));
            prop_assert_eq!(output, &expected);
        }
    }

    /// PROPERTY: Absolute and relative spellings of a source map identically.
    #[test]
    fn property_absolute_source_matches_relative(rel in relative_source()) {
        let relative = Path::new("icons/svg").join(&rel);
        let absolute = Path::new("/work/icons/svg").join(&rel);
        prop_assert_eq!(
            mapper().all_output_paths(&relative).unwrap(),
            mapper().all_output_paths(&absolute).unwrap()
        );
    }

    /// PROPERTY: Paths outside the input root never map.
    #[test]
    fn property_foreign_paths_are_rejected(rel in relative_source(), other in segment()) {
        prop_assume!(other != "icons");
        let foreign = Path::new(&other).join(&rel);
        prop_assert!(mapper().all_output_paths(&foreign).is_err());
    }
}
