use super::Dataset;
use crate::sample::Species;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

impl Dataset {
    /// Stratified train/test split. Each class contributes
    /// `round(n_class * fraction)` samples to the test side, chosen by a
    /// seeded shuffle, so class proportions survive on both sides.
    pub fn split(&self, fraction: f64, seed: u64) -> (Dataset, Dataset) {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut train = Vec::new();
        let mut test = Vec::new();
        for species in Species::all() {
            let mut members = self
                .iter()
                .filter(|s| s.species() == *species)
                .copied()
                .collect::<Vec<_>>();
            members.shuffle(rng);
            let n = (members.len() as f64 * fraction).round() as usize;
            let n = n.min(members.len());
            test.extend(members.drain(..n));
            train.extend(members);
        }
        (Dataset::from(train), Dataset::from(test))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Sample;

    fn dataset() -> Dataset {
        (0..30i64)
            .map(|i| {
                let species = Species::try_from(i % 3).unwrap();
                Sample::new([i as f64, 1., 2., 3.], species).unwrap()
            })
            .collect()
    }

    #[test]
    fn split_is_stratified() {
        let (train, test) = dataset().split(0.2, 42);
        assert!(train.len() == 24);
        assert!(test.len() == 6);
        for species in Species::all() {
            let n = test.iter().filter(|s| s.species() == *species).count();
            assert!(n == 2);
        }
    }

    #[test]
    fn split_is_deterministic() {
        assert!(dataset().split(0.2, 7) == dataset().split(0.2, 7));
    }

    #[test]
    fn split_partitions() {
        let data = dataset();
        let (train, test) = data.split(0.3, 1);
        let mut seen = train
            .iter()
            .chain(test.iter())
            .map(|s| s.features()[0] as i64)
            .collect::<Vec<_>>();
        seen.sort();
        assert!(seen == (0..30).collect::<Vec<_>>());
    }
}
