use std::collections::BTreeMap;

use crate::types::models::addon::Addon;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("Invalid add-on reference: {0}")]
    InvalidAddonReference(String),
}

/// Which add-ons to keep by their featured flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeaturedFilter {
    Any,
    Featured,
    NotFeatured,
}

impl FeaturedFilter {
    pub fn matches(&self, addon: &Addon) -> bool {
        match self {
            FeaturedFilter::Any => true,
            FeaturedFilter::Featured => addon.featured,
            FeaturedFilter::NotFeatured => !addon.featured,
        }
    }
}

/// Add-ons of one page render, keyed by identifier.
#[derive(Debug, Default)]
pub struct Catalog {
    addons: BTreeMap<String, Addon>,
}

impl Catalog {
    pub fn new(addons: BTreeMap<String, Addon>) -> Result<Catalog, CatalogError> {
        for (key, addon) in &addons {
            if *key != addon.identifier {
                return Err(CatalogError::InvalidAddonReference(format!(
                    "key '{}' holds add-on '{}'",
                    key, addon.identifier
                )));
            }
            if addon.title.is_empty() {
                return Err(CatalogError::InvalidAddonReference(format!(
                    "add-on '{}' has no title",
                    key
                )));
            }
        }

        Ok(Catalog { addons })
    }

    pub fn len(&self) -> usize {
        self.addons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addons.is_empty()
    }

    pub fn sorted_by_title(&self) -> Vec<&Addon> {
        sort_by_title(self.addons.values())
    }
}

/// Orders add-ons by title. Equal titles keep their input order.
pub fn sort_by_title<'a>(addons: impl IntoIterator<Item = &'a Addon>) -> Vec<&'a Addon> {
    let mut ret: Vec<&Addon> = addons.into_iter().collect();
    ret.sort_by(|a, b| a.title.cmp(&b.title));
    ret
}

pub fn filter_by_game_modes<'a>(addons: &[&'a Addon], modes: &[&str]) -> Vec<&'a Addon> {
    addons
        .iter()
        .copied()
        .filter(|addon| addon.supports_any_game_mode(modes))
        .collect()
}

pub fn filter_by_featured<'a>(addons: &[&'a Addon], want: FeaturedFilter) -> Vec<&'a Addon> {
    addons
        .iter()
        .copied()
        .filter(|addon| want.matches(addon))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn addon(id: &str, title: &str, modes: &[&str], featured: bool) -> Addon {
        let mut ret = Addon::new(id, title);
        ret.game_modes = modes.iter().map(|m| m.to_string()).collect();
        ret.featured = featured;
        ret
    }

    fn ids(addons: &[&Addon]) -> Vec<String> {
        addons.iter().map(|a| a.identifier.clone()).collect()
    }

    fn sample() -> Vec<Addon> {
        vec![
            addon("c", "Charlie", &["doom2"], false),
            addon("a", "alpha", &["heretic"], true),
            addon("b", "Bravo", &["doom1", "hexen"], true),
            addon("d", "Bravo", &[], true),
        ]
    }

    #[test]
    fn sort_is_ordinal_and_keeps_everything() {
        let addons = sample();
        let sorted = sort_by_title(&addons);

        assert_eq!(sorted.len(), addons.len());
        assert!(sorted.windows(2).all(|w| w[0].title <= w[1].title));
        // Uppercase sorts before lowercase; the two "Bravo"s keep input order.
        assert_eq!(ids(&sorted), vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn game_mode_filter_keeps_intersecting() {
        let addons = sample();
        let sorted = sort_by_title(&addons);

        assert_eq!(
            ids(&filter_by_game_modes(&sorted, &["doom1", "doom2"])),
            vec!["b", "c"]
        );
        assert_eq!(ids(&filter_by_game_modes(&sorted, &["hexen"])), vec!["b"]);
        assert!(filter_by_game_modes(&sorted, &["strife"]).is_empty());
        assert!(filter_by_game_modes(&sorted, &[]).is_empty());
    }

    #[test]
    fn featured_filter() {
        let addons = sample();
        let sorted = sort_by_title(&addons);

        assert_eq!(
            ids(&filter_by_featured(&sorted, FeaturedFilter::Featured)),
            vec!["b", "d", "a"]
        );
        assert_eq!(
            ids(&filter_by_featured(&sorted, FeaturedFilter::NotFeatured)),
            vec!["c"]
        );
        assert_eq!(
            ids(&filter_by_featured(&sorted, FeaturedFilter::Any)),
            ids(&sorted)
        );
    }

    #[test]
    fn catalog_sorts_its_addons() {
        let map = sample()
            .into_iter()
            .map(|a| (a.identifier.clone(), a))
            .collect::<BTreeMap<_, _>>();
        let catalog = Catalog::new(map).unwrap();

        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
        assert_eq!(ids(&catalog.sorted_by_title()), vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn catalog_rejects_mismatched_key() {
        let mut map = BTreeMap::new();
        map.insert("x".to_string(), addon("y", "Y", &[], false));
        assert!(matches!(
            Catalog::new(map),
            Err(CatalogError::InvalidAddonReference(_))
        ));
    }

    #[test]
    fn catalog_rejects_untitled() {
        let mut map = BTreeMap::new();
        map.insert("x".to_string(), addon("x", "", &[], false));
        assert!(Catalog::new(map).is_err());
    }

    /// Add-ons with unique identifiers `a0`, `a1`, ... in generation order.
    fn arb_addons(mode: &'static str) -> impl Strategy<Value = Vec<Addon>> {
        prop::collection::vec(
            (
                "[A-Ca-c ]{1,3}",
                prop::collection::btree_set(mode, 0..4),
                any::<bool>(),
            ),
            0..24,
        )
        .prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (title, modes, featured))| {
                    let mut ret = Addon::new(&format!("a{}", i), &title);
                    ret.game_modes = modes;
                    ret.featured = featured;
                    ret
                })
                .collect::<Vec<Addon>>()
        })
    }

    fn position(addons: &[Addon], addon: &Addon) -> usize {
        addons
            .iter()
            .position(|a| a.identifier == addon.identifier)
            .unwrap()
    }

    proptest! {
        #[test]
        fn sort_is_an_ordered_permutation(addons in arb_addons("[a-e]")) {
            let sorted = sort_by_title(&addons);

            let mut before: Vec<&str> = addons.iter().map(|a| a.identifier.as_str()).collect();
            let mut after: Vec<&str> = sorted.iter().map(|a| a.identifier.as_str()).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);

            for w in sorted.windows(2) {
                prop_assert!(w[0].title <= w[1].title);
                if w[0].title == w[1].title {
                    prop_assert!(position(&addons, w[0]) < position(&addons, w[1]));
                }
            }
        }

        #[test]
        fn game_mode_filter_keeps_exactly_intersecting(
            addons in arb_addons("[a-e]"),
            modes in prop::collection::btree_set("[a-e]", 0..4),
        ) {
            let sorted = sort_by_title(&addons);
            let modes: Vec<&str> = modes.iter().map(String::as_str).collect();
            let kept = filter_by_game_modes(&sorted, &modes);

            let expected: Vec<&Addon> = sorted
                .iter()
                .copied()
                .filter(|a| modes.iter().any(|m| a.game_modes.contains(*m)))
                .collect();
            prop_assert_eq!(ids(&kept), ids(&expected));
        }

        #[test]
        fn disjoint_game_modes_match_nothing(
            addons in arb_addons("[a-e]"),
            modes in prop::collection::btree_set("[f-j]", 0..4),
        ) {
            let sorted = sort_by_title(&addons);
            let modes: Vec<&str> = modes.iter().map(String::as_str).collect();
            prop_assert!(filter_by_game_modes(&sorted, &modes).is_empty());
        }

        #[test]
        fn featured_filter_partitions(addons in arb_addons("[a-e]")) {
            let sorted = sort_by_title(&addons);
            let featured = filter_by_featured(&sorted, FeaturedFilter::Featured);
            let rest = filter_by_featured(&sorted, FeaturedFilter::NotFeatured);

            prop_assert!(featured.iter().all(|a| a.featured));
            prop_assert!(rest.iter().all(|a| !a.featured));
            prop_assert_eq!(featured.len() + rest.len(), sorted.len());
            prop_assert_eq!(ids(&filter_by_featured(&sorted, FeaturedFilter::Any)), ids(&sorted));
        }
    }
}
