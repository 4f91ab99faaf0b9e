use std::collections::HashSet;

/// Lower-case every entry, keeping order and duplicates
#[inline]
pub fn normalize_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}

/// Split a job's required skills into the ones the user has and the ones they lack
///
/// Comparison is exact equality after lower-casing. Both output lists keep the
/// order of `required_skills` and hold the lower-cased form.
pub fn partition_skills(
    required_skills: &[String],
    user_skills: &HashSet<String>,
) -> (Vec<String>, Vec<String>) {
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in required_skills {
        let skill = skill.to_lowercase();
        if user_skills.contains(&skill) {
            matched.push(skill);
        } else {
            missing.push(skill);
        }
    }

    (matched, missing)
}

/// Points earned for skill coverage
///
/// A job with no required skills earns nothing here.
#[inline]
pub fn skill_score(matched: usize, required: usize, weight: f64) -> f64 {
    if required == 0 {
        return 0.0;
    }

    (matched as f64 / required as f64) * weight
}
