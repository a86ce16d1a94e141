use super::scoring::round2;
use super::CourseResult;

/// Anything that carries credits and a graded result.
pub trait Credited {
    fn credits(&self) -> u32;
    fn result(&self) -> &CourseResult;
}

/// Credit-weighted grade point average, two decimals.
///
/// Courses with zero credits are skipped. A failed course adds its credits to the
/// denominator and nothing to the numerator. An empty list yields 0.
pub fn calculate_sgpa<'a, C, I>(courses: I) -> f64
where
    C: Credited + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let mut total_credits: u32 = 0;
    let mut weighted_points: f64 = 0.0;

    for course in courses {
        let credits = course.credits();
        if credits == 0 {
            continue;
        }
        total_credits += credits;
        let result = course.result();
        if result.is_pass {
            weighted_points += f64::from(result.points) * f64::from(credits);
        }
    }

    if total_credits == 0 {
        return 0.0;
    }
    round2(weighted_points / f64::from(total_credits))
}
