use crate::core::tags::{tag_set, TagSet};
use crate::models::{PeerProfile, RankedPeer};

/// Jaccard similarity between two tag sets: |A ∩ B| / |A ∪ B|.
///
/// Defined as 0 when the union is empty, so empty inputs never divide by
/// zero. Symmetric, always in [0, 1].
#[inline]
pub fn jaccard(a: &TagSet, b: &TagSet) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Map an affinity score in [0, 1] to a 0-5 star rating, one decimal place.
#[inline]
pub fn star_rating(score: f64) -> f64 {
    (score * 5.0 * 10.0).round() / 10.0
}

/// Rank a candidate pool against the viewer's tag set.
///
/// Each candidate is scored with [`jaccard`] over the viewer tags and the
/// candidate's skills, then the pool is sorted by descending score. The sort
/// is stable: candidates with equal scores keep their relative pool order.
///
/// Pure function of its inputs; an empty pool yields an empty result and an
/// empty viewer tag set yields all-zero scores.
pub fn rank(viewer_tags: &TagSet, pool: &[PeerProfile]) -> Vec<RankedPeer> {
    let mut ranked: Vec<RankedPeer> = pool
        .iter()
        .map(|profile| {
            let skills = tag_set(profile.skills.iter().cloned());
            let score = jaccard(viewer_tags, &skills);

            let mut shared_tags: Vec<String> =
                viewer_tags.intersection(&skills).cloned().collect();
            shared_tags.sort();

            RankedPeer {
                user_id: profile.id.clone(),
                name: profile.name.clone(),
                year: profile.year.clone(),
                branch: profile.branch.clone(),
                bio: profile.bio.clone(),
                skills: profile.skills.clone(),
                looking_for: profile.looking_for.clone(),
                score,
                stars: star_rating(score),
                shared_tags,
            }
        })
        .collect();

    // sort_by is stable, so ties preserve the input order of the pool
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}
