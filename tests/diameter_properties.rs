use std::f64::consts::PI;

use approx::assert_relative_eq;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Exp, Uniform};

use pore_diameter::network::{SEED_KEY, VOLUME_KEY};
use pore_diameter::{
    BUILTIN_REGISTRY, DiameterOptions, DistributionSpec, Family, PoreError, PoreNetwork,
    PoreSelection, Quantile, sphere, sphere_from_radius, voronoi,
};

fn random_seeds(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let unit = Uniform::new(0.0, 1.0);
    (0..n).map(|_| unit.sample(&mut rng)).collect()
}

fn random_volumes(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let exp = Exp::new(1e15).unwrap();
    (0..n).map(|_| exp.sample(&mut rng)).collect()
}

fn seeded_network(seeds: Vec<f64>) -> PoreNetwork {
    PoreNetwork::new(seeds.len()).with_array(SEED_KEY, seeds).unwrap()
}

/// Specs that only produce non-negative sizes for seeds in [0, 1).
fn size_distributions() -> Vec<DistributionSpec> {
    vec![
        DistributionSpec::with_shape("weibull_min", 2.77, 6.9e-7, 9.8e-6),
        DistributionSpec::with_shape("lognorm", 0.25, 0.0, 2.0e-5),
        DistributionSpec::with_shape("gamma", 3.0, 0.0, 4.0e-6),
        DistributionSpec::with_shape("pareto", 2.0, 0.0, 1.0e-6),
        DistributionSpec::with_shape("triang", 0.3, 1.0e-6, 1.0e-5),
        DistributionSpec::new("uniform", 1.0e-6, 4.0e-5),
        DistributionSpec::new("expon", 0.0, 1.0e-5),
        DistributionSpec::new("rayleigh", 0.0, 1.0e-5),
        DistributionSpec::new("halfnorm", 0.0, 1.0e-5),
    ]
}

#[test]
fn sphere_output_has_one_value_per_seed_above_support() {
    let seeds = random_seeds(500, 7);
    let net = seeded_network(seeds.clone());
    for psd in size_distributions() {
        let d = sphere(&net, &psd, &DiameterOptions::default()).unwrap();
        assert_eq!(d.len(), seeds.len(), "{}", psd.name);

        let lower = BUILTIN_REGISTRY.resolve(&psd).unwrap().support_lower();
        assert!(d.iter().all(|&x| x >= lower), "{} below support", psd.name);
    }
}

#[test]
fn sphere_from_radius_is_twice_sphere() {
    let net = seeded_network(random_seeds(200, 11));
    for psd in size_distributions() {
        let opts = DiameterOptions::default();
        let d = sphere(&net, &psd, &opts).unwrap();
        let r = sphere_from_radius(&net, &psd, &opts).unwrap();
        for (a, b) in d.iter().zip(&r) {
            assert_eq!(2.0 * a, *b, "{}", psd.name);
        }
    }
}

#[test]
fn sphere_is_monotone_in_seed() {
    let mut seeds = random_seeds(300, 3);
    seeds.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let net = seeded_network(seeds);
    for psd in size_distributions() {
        let d = sphere(&net, &psd, &DiameterOptions::default()).unwrap();
        for w in d.windows(2) {
            assert!(w[0] <= w[1], "{} not monotone", psd.name);
        }
    }
}

#[test]
fn repeated_calls_are_bitwise_identical() {
    let seeds = random_seeds(100, 5);
    let volumes = random_volumes(100, 5);
    let net = seeded_network(seeds).with_array(VOLUME_KEY, volumes).unwrap();
    let opts = DiameterOptions::default();
    let psd = DistributionSpec::with_shape("gamma", 1.5, 0.0, 1.0e-5);

    let bits = |v: Vec<f64>| v.into_iter().map(f64::to_bits).collect::<Vec<_>>();
    assert_eq!(bits(sphere(&net, &psd, &opts).unwrap()), bits(sphere(&net, &psd, &opts).unwrap()));
    assert_eq!(
        bits(sphere_from_radius(&net, &psd, &opts).unwrap()),
        bits(sphere_from_radius(&net, &psd, &opts).unwrap())
    );
    assert_eq!(bits(voronoi(&net, &opts).unwrap()), bits(voronoi(&net, &opts).unwrap()));
}

#[test]
fn voronoi_recovers_volume() {
    let volumes = random_volumes(400, 13);
    let net = PoreNetwork::new(volumes.len()).with_array(VOLUME_KEY, volumes.clone()).unwrap();
    let d = voronoi(&net, &DiameterOptions::default()).unwrap();
    for (v, d) in volumes.iter().zip(&d) {
        assert_relative_eq!(PI / 6.0 * d.powi(3), *v, max_relative = 1e-12);
    }
}

#[test]
fn voronoi_follows_selection() {
    let volumes = vec![PI / 6.0, 8.0 * PI / 6.0, 27.0 * PI / 6.0];
    let mut net = PoreNetwork::new(3).with_array(VOLUME_KEY, volumes).unwrap();
    net.set_label("pore.internal", vec![false, true, true]).unwrap();

    let opts = DiameterOptions::default().pores(PoreSelection::label("internal"));
    let d = voronoi(&net, &opts).unwrap();
    assert_eq!(d.len(), 2);
    assert_relative_eq!(d[0], 2.0, max_relative = 1e-12);
    assert_relative_eq!(d[1], 3.0, max_relative = 1e-12);
}

#[test]
fn normal_median_scenario() {
    let net = seeded_network(vec![0.5]);
    let psd = DistributionSpec::new("norm", 5.0, 1.0);
    assert_eq!(sphere(&net, &psd, &DiameterOptions::default()).unwrap(), vec![5.0]);
}

#[test]
fn large_shape_gamma_matches_reference_quantiles() {
    // scipy.stats.gamma(a).ppf([0.01, 0.5])
    let net = seeded_network(vec![0.01, 0.5]);
    let cases = [
        (1e4, [9768.836856696591, 9999.666668642047]),
        (1e5, [99265.815163461347, 99999.666666864198]),
        (1e6, [997675.12285992522, 999999.66666668642]),
    ];
    for (a, expected) in cases {
        let psd = DistributionSpec::with_shape("gamma", a, 0.0, 1.0);
        let d = sphere(&net, &psd, &DiameterOptions::default()).unwrap();
        for (got, want) in d.iter().zip(expected) {
            assert_relative_eq!(*got, want, max_relative = 1e-9);
        }
    }
}

#[test]
fn unknown_distribution_returns_no_output() {
    let net = seeded_network(random_seeds(10, 1));
    let psd = DistributionSpec::new("not_a_real_distribution", 0.0, 1.0);
    let err = sphere(&net, &psd, &DiameterOptions::default()).unwrap_err();
    assert!(matches!(err, PoreError::Configuration { .. }));
}

#[test]
fn negative_volume_fails_whole_call() {
    let net = PoreNetwork::new(3).with_array(VOLUME_KEY, vec![1.0, 2.0, -1.0]).unwrap();
    let err = voronoi(&net, &DiameterOptions::default()).unwrap_err();
    assert!(matches!(err, PoreError::InvalidInput { index: 2, .. }));
    assert!(err.is_input_error());
}

#[test]
fn every_builtin_family_is_registered() {
    for family in Family::ALL {
        assert!(BUILTIN_REGISTRY.contains(family.name()), "{}", family.name());
    }
}
