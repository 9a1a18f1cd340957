//! Property-based tests for the distance algorithms and the Finder.
//!
//! 1. **Non-negativity**: d(x, y) >= 0
//! 2. **Identity**: d(x, x) = 0 (weighted Jaccard gives 0.5 for non-empty x)
//! 3. **Symmetry**: d(x, y) = d(y, x)
//! 4. **Cache transparency**: warm and cold caches give the same distance
//! 5. **Ranking**: Finder results are within the threshold and sorted

use proptest::prelude::*;
use strdist::{
    hamming, levenshtein, scaled_levenshtein, Algo, Cosine, Finder, FinderConfig, Hamming, Jaccard,
    Levenshtein, Metric, NGramConfig, ScaledLevenshtein, WeightedJaccard,
};

fn arb_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{0,12}").unwrap()
}

fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..12).prop_map(|chars| chars.into_iter().collect())
}

fn arb_ngram_config() -> impl Strategy<Value = NGramConfig> {
    (1usize..5, 0usize..5, any::<bool>())
        .prop_filter("min length within length", |(len, min, _)| min <= len)
        .prop_map(|(len, min, overflow)| NGramConfig::new(len, min, overflow).unwrap())
}

fn ngram_algos(config: NGramConfig) -> Vec<Algo> {
    vec![
        Cosine::new(config, 3).unwrap().into(),
        Jaccard::new(config, 3).unwrap().into(),
        WeightedJaccard::new(config, 3).unwrap().into(),
    ]
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn edit_distances_identity(a in arb_unicode_string()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
        prop_assert_eq!(hamming(&a, &a), 0);
        prop_assert_eq!(scaled_levenshtein(&a, &a), 0.0);
    }

    #[test]
    fn edit_distances_symmetric(a in arb_unicode_string(), b in arb_unicode_string()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        prop_assert_eq!(hamming(&a, &b), hamming(&b, &a));
        prop_assert_eq!(scaled_levenshtein(&a, &b), scaled_levenshtein(&b, &a));
    }

    #[test]
    fn levenshtein_bounded_by_hamming(a in arb_string(), b in arb_string()) {
        prop_assert!(levenshtein(&a, &b) <= hamming(&a, &b));
    }

    #[test]
    fn scaled_levenshtein_in_unit_range(a in arb_unicode_string(), b in arb_unicode_string()) {
        let d = scaled_levenshtein(&a, &b);
        prop_assert!((0.0..=1.0).contains(&d));
    }

    #[test]
    fn ngram_distances_in_unit_range(
        config in arb_ngram_config(),
        a in arb_string(),
        b in arb_string(),
    ) {
        for mut algo in ngram_algos(config) {
            let d = algo.distance(&a, &b);
            prop_assert!((-1e-12..=1.0 + 1e-12).contains(&d), "{} gave {}", algo.name(), d);
        }
    }

    #[test]
    fn ngram_distances_symmetric(
        config in arb_ngram_config(),
        a in arb_string(),
        b in arb_string(),
    ) {
        for mut algo in ngram_algos(config) {
            let d_ab = algo.distance(&a, &b);
            let d_ba = algo.distance(&b, &a);
            prop_assert!(approx_eq(d_ab, d_ba), "{}: {} != {}", algo.name(), d_ab, d_ba);
        }
    }

    #[test]
    fn ngram_distances_identity(config in arb_ngram_config(), a in arb_string()) {
        let mut cosine = Cosine::new(config, 3).unwrap();
        let mut jaccard = Jaccard::new(config, 3).unwrap();
        prop_assert_eq!(cosine.distance(&a, &a), 0.0);
        prop_assert_eq!(jaccard.distance(&a, &a), 0.0);

        let mut weighted = WeightedJaccard::new(config, 3).unwrap();
        let d = weighted.distance(&a, &a);
        if config.ngrams(&a).is_empty() {
            prop_assert_eq!(d, 0.0);
        } else {
            prop_assert!(approx_eq(d, 0.5));
        }
    }

    #[test]
    fn cache_is_transparent(
        config in arb_ngram_config(),
        words in prop::collection::vec(arb_string(), 1..10),
    ) {
        // a one-entry cache evicts on nearly every call
        let mut small: Vec<Algo> = vec![
            Cosine::new(config, 1).unwrap().into(),
            Jaccard::new(config, 1).unwrap().into(),
        ];
        let mut uncached: Vec<Algo> = vec![
            Cosine::new(config, 0).unwrap().into(),
            Jaccard::new(config, 0).unwrap().into(),
        ];

        for pair in words.windows(2) {
            for (s, u) in small.iter_mut().zip(uncached.iter_mut()) {
                prop_assert_eq!(s.distance(&pair[0], &pair[1]), u.distance(&pair[0], &pair[1]));
            }
        }
    }

    #[test]
    fn finder_results_within_threshold_and_ranked(
        target in arb_string(),
        population in prop::collection::vec(arb_string(), 0..30),
        threshold in 0.0f64..6.0,
        min_str_length in 0usize..4,
    ) {
        let config = FinderConfig::new(threshold, min_str_length).unwrap();
        let mut finder = Finder::new(config, Levenshtein::new()).unwrap();
        let found = finder.find_like(&target, &population);

        if target.chars().count() < min_str_length {
            prop_assert!(found.is_empty());
        }
        for sd in &found {
            prop_assert!(sd.distance <= threshold);
            prop_assert!(sd.value.chars().count() >= min_str_length);
            prop_assert!(population.contains(&sd.value));
        }
        for pair in found.windows(2) {
            prop_assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn finder_parallel_matches_sequential(
        target in arb_string(),
        population in prop::collection::vec(arb_string(), 0..200),
    ) {
        let config = FinderConfig::new(0.5, 2).unwrap();
        let mut finder = Finder::new(config, ScaledLevenshtein::new()).unwrap();
        let parallel = finder.par_find_like(&target, &population);
        prop_assert_eq!(parallel, finder.find_like(&target, &population));

        let config = FinderConfig::new(3.0, 2).unwrap();
        let mut finder = Finder::new(config, Hamming::new()).unwrap();
        let parallel = finder.par_find_like(&target, &population);
        prop_assert_eq!(parallel, finder.find_like(&target, &population));
    }
}
