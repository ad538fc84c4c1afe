use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use logo_core::{Image, OrbConfig};
use logo_fast::corner_detection::CornerDetector;
use logo_fast::pyramid::ImagePyramid;
use logo_fast::refinement::KeypointRefinement;
use logo_fast::FastDetector;

/// Create benchmark image with realistic corner patterns
fn create_benchmark_image(width: usize, height: usize, complexity: &str) -> Image {
    let mut img = vec![128; width * height];

    match complexity {
        "blocks" => {
            // Pseudo-random 8x8 blocks, similar in density to a printed logo
            let mut state = 0x9E37_79B9u32;
            let cols = width.div_ceil(8);
            let cells: Vec<u8> = (0..cols * height.div_ceil(8))
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    (state >> 24) as u8
                })
                .collect();
            for y in 0..height {
                for x in 0..width {
                    img[y * width + x] = cells[(y / 8) * cols + x / 8];
                }
            }
        }
        "realistic" => {
            for y in 0..height {
                for x in 0..width {
                    let gradient = ((x as f32 / width as f32) * 50.0) as u8;
                    let noise = ((x + y) % 7) as u8;
                    img[y * width + x] = 100 + gradient + noise;
                }
            }
            for i in 0..20 {
                let cx = (i * width / 20) % width;
                let cy = (i * height / 20) % height;
                for dy in -6..=6 {
                    for dx in -6..=6 {
                        let x = (cx as i32 + dx) as usize;
                        let y = (cy as i32 + dy) as usize;
                        if x < width && y < height {
                            img[y * width + x] = 230;
                        }
                    }
                }
            }
        }
        _ => {}
    }

    img
}

fn create_test_config() -> OrbConfig {
    OrbConfig {
        n_threads: 1,
        ..OrbConfig::default()
    }
}

/// Benchmark full detection pipeline
fn bench_full_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_detection");

    let sizes = [(128, 128), (256, 256), (640, 480)];
    let complexities = ["uniform", "blocks", "realistic"];

    for &(width, height) in &sizes {
        for complexity in &complexities {
            let detector = FastDetector::new(create_test_config(), width, height).unwrap();
            let img = create_benchmark_image(width, height, complexity);

            group.bench_with_input(
                BenchmarkId::new(format!("{}x{}", width, height), complexity),
                &(detector, img),
                |b, (detector, img)| b.iter(|| black_box(detector.detect_keypoints(black_box(img)).unwrap())),
            );
        }
    }

    group.finish();
}

/// Benchmark individual pipeline stages
fn bench_pipeline_stages(c: &mut Criterion) {
    let (width, height) = (256, 256);
    let cfg = create_test_config();
    let detector = FastDetector::new(cfg.clone(), width, height).unwrap();
    let img = create_benchmark_image(width, height, "blocks");

    let mut group = c.benchmark_group("pipeline_stages");

    group.bench_function("build_pyramid", |b| {
        b.iter(|| {
            black_box(
                ImagePyramid::build_image_pyramid(black_box(&img), width, height, detector.get_scale_levels()).unwrap(),
            )
        })
    });

    let levels = detector.get_scale_levels();
    group.bench_function("segment_test_level0", |b| {
        b.iter(|| {
            black_box(CornerDetector::detect_keypoints_at_scale(
                black_box(&img),
                &levels[0],
                cfg.threshold,
                cfg.edge_threshold,
            ))
        })
    });

    group.bench_function("harris_100_points", |b| {
        b.iter(|| {
            for i in 0..100 {
                let (x, y) = (50 + (i % 10) * 15, 50 + (i / 10) * 15);
                black_box(CornerDetector::compute_harris_response(black_box(&img), width, height, x, y));
            }
        })
    });

    group.bench_function("orientation_100_points", |b| {
        b.iter(|| {
            for i in 0..100 {
                let (x, y) = (50 + (i % 10) * 15, 50 + (i / 10) * 15);
                black_box(KeypointRefinement::compute_orientation(black_box(&img), width, height, x, y, cfg.patch_size));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_full_detection, bench_pipeline_stages);
criterion_main!(benches);
