use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::ThreadRng;
use spectra::kernel::KernelLifecycle;
use spectra::signal::traits::{Autocorrelate1D, Periodogram1D};
use spectra::signal::{
    uniform_power_spectrum, AutocorrelationConfig, AutocorrelationKernel, AutocorrelationMethod,
    FrequencyGrid, LombScargleConfig, LombScargleKernel,
};

/// Jittered sample times and a noisy three-tone signal drawn from `rng`.
fn randomized_signal(mut rng: ThreadRng, n: usize, mean_interval: f64) -> (Vec<f64>, Vec<f64>) {
    use rand::Rng;

    let t: Vec<f64> = (0..n)
        .map(|i| (i as f64 + rng.random_range(-0.3..0.3)) * mean_interval)
        .collect();
    let tones: Vec<(f64, f64)> = (0..3)
        .map(|_| (rng.random_range(0.5..5.0), rng.random_range(0.0..std::f64::consts::PI)))
        .collect();
    let y = t
        .iter()
        .map(|ti| {
            tones
                .iter()
                .map(|(f, p)| (std::f64::consts::TAU * f * ti + p).sin())
                .sum::<f64>()
                + rng.random_range(-0.1..0.1)
        })
        .collect();
    (t, y)
}

fn power_spectrum(c: &mut Criterion) {
    for n in [1024usize, 1000, 1 << 14] {
        let (_, y) = randomized_signal(rand::rng(), n, 0.01);
        c.bench_with_input(BenchmarkId::new("uniform_power_spectrum", n), &y, |b, y| {
            b.iter(|| uniform_power_spectrum(black_box(y)))
        });
    }
}

fn lomb_scargle(c: &mut Criterion) {
    let (t, y) = randomized_signal(rand::rng(), 2000, 0.01);
    let grid = FrequencyGrid::linspace(0.5, 60.0, 2000).expect("benchmark grid should be valid");

    for floating_mean in [false, true] {
        let kernel = LombScargleKernel::try_new(LombScargleConfig {
            normalize: true,
            floating_mean,
            ..Default::default()
        })
        .expect("lomb-scargle kernel config should be valid");
        let mut out = vec![0.0; grid.len()];
        c.bench_function(
            &format!("lomb_scargle floating_mean={floating_mean}"),
            |b| {
                b.iter(|| {
                    kernel.run_into(
                        black_box(&t),
                        black_box(&y),
                        black_box(grid.as_slice()),
                        &mut out,
                    )
                })
            },
        );
    }
}

fn autocorrelation(c: &mut Criterion) {
    let (_, y) = randomized_signal(rand::rng(), 4096, 0.01);
    for method in [AutocorrelationMethod::Direct, AutocorrelationMethod::Fft] {
        let kernel = AutocorrelationKernel::try_new(AutocorrelationConfig { method })
            .expect("autocorrelation kernel config should be valid");
        c.bench_with_input(
            BenchmarkId::new("autocorrelation", format!("{method:?}")),
            &y,
            |b, y| b.iter(|| kernel.run_alloc(black_box(y))),
        );
    }
}

criterion_group!(benches, power_spectrum, lomb_scargle, autocorrelation);
criterion_main!(benches);
