//! Property-based tests for distance metric mathematical properties.
//!
//! The edit distance behind "did you mean?" must be a metric:
//!
//! 1. **Identity of indiscernibles**: d(x, y) = 0 ⟺ x = y
//! 2. **Symmetry**: d(x, y) = d(y, x)
//! 3. **Triangle inequality**: d(x, z) <= d(x, y) + d(y, z)
//! 4. **Length bounds**: |len(x) - len(y)| <= d(x, y) <= max(len(x), len(y))
//!
//! The folded variant additionally ignores case and surrounding whitespace.

use fitlex::distance::*;
use proptest::prelude::*;

// String generators
fn arb_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{0,20}").unwrap()
}

fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..20).prop_map(|chars| chars.into_iter().collect())
}

fn arb_exercise_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-z]{2,8}( [A-Z][a-z]{2,8}){0,3}").unwrap()
}

// ============================================================================
// Standard Distance
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn standard_distance_identity(a in arb_unicode_string()) {
        prop_assert_eq!(standard_distance(&a, &a), 0);
    }

    #[test]
    fn standard_distance_indiscernible(a in arb_string(), b in arb_string()) {
        if standard_distance(&a, &b) == 0 {
            prop_assert_eq!(&a, &b, "If distance is zero, strings must be identical");
        }
    }

    #[test]
    fn standard_distance_symmetric(a in arb_unicode_string(), b in arb_unicode_string()) {
        prop_assert_eq!(
            standard_distance(&a, &b),
            standard_distance(&b, &a),
            "Distance must be symmetric: d(a,b) = d(b,a)"
        );
    }

    #[test]
    fn standard_distance_triangle_inequality(
        a in arb_string(),
        b in arb_string(),
        c in arb_string()
    ) {
        let d_ac = standard_distance(&a, &c);
        let d_ab = standard_distance(&a, &b);
        let d_bc = standard_distance(&b, &c);

        prop_assert!(
            d_ac <= d_ab + d_bc,
            "Triangle inequality violated: d({:?}, {:?}) = {} > {} + {}",
            a, c, d_ac, d_ab, d_bc
        );
    }

    #[test]
    fn standard_distance_length_bounds(a in arb_unicode_string(), b in arb_unicode_string()) {
        let la = a.chars().count();
        let lb = b.chars().count();
        let d = standard_distance(&a, &b);

        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    #[test]
    fn standard_distance_empty_is_length(a in arb_unicode_string()) {
        prop_assert_eq!(standard_distance(&a, ""), a.chars().count());
        prop_assert_eq!(standard_distance("", &a), a.chars().count());
    }

    #[test]
    fn standard_distance_common_prefix_invariance(
        prefix in arb_string(),
        x in arb_string(),
        y in arb_string()
    ) {
        let px = format!("{}{}", prefix, x);
        let py = format!("{}{}", prefix, y);
        prop_assert_eq!(standard_distance(&px, &py), standard_distance(&x, &y));
    }
}

// ============================================================================
// Folded Distance
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn folded_distance_ignores_case(name in arb_exercise_name()) {
        prop_assert_eq!(folded_distance(&name.to_uppercase(), &name.to_lowercase()), 0);
    }

    #[test]
    fn folded_distance_ignores_surrounding_whitespace(
        name in arb_exercise_name(),
        lead in " {0,3}",
        trail in " {0,3}"
    ) {
        let padded = format!("{}{}{}", lead, name, trail);
        prop_assert_eq!(folded_distance(&padded, &name), 0);
    }

    #[test]
    fn folded_distance_never_exceeds_standard(a in arb_exercise_name(), b in arb_exercise_name()) {
        prop_assert!(folded_distance(&a, &b) <= standard_distance(&a, &b));
    }
}
