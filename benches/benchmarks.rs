criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        parsing_iris_csv,
        splitting_stratified,
        fitting_pipeline,
        predicting_single_sample,
        describing_columns,
        encoding_artifact,
        decoding_artifact,
}

const IRIS: &str = include_str!("../sample_data/iris.csv");

fn iris() -> Dataset {
    Dataset::from_reader(IRIS.as_bytes(), &ColumnMap::generic()).expect("bundled csv")
}

fn parsing_iris_csv(c: &mut criterion::Criterion) {
    c.bench_function("parse the 150-row Iris CSV", |b| {
        b.iter(|| Dataset::from_reader(IRIS.as_bytes(), &ColumnMap::generic()))
    });
}

fn splitting_stratified(c: &mut criterion::Criterion) {
    let dataset = iris();
    c.bench_function("stratified 80/20 split", |b| {
        b.iter(|| dataset.split(SPLIT_TEST_FRACTION, SPLIT_SEED))
    });
}

fn fitting_pipeline(c: &mut criterion::Criterion) {
    let dataset = iris();
    c.bench_function("fit scaler and logistic regression", |b| {
        b.iter(|| Pipeline::fit(&dataset))
    });
}

fn predicting_single_sample(c: &mut criterion::Criterion) {
    let pipeline = Pipeline::fit(&iris()).expect("fit");
    c.bench_function("predict_proba for one sample", |b| {
        b.iter(|| pipeline.predict_proba(&[5.1, 3.5, 1.4, 0.2]))
    });
}

fn describing_columns(c: &mut criterion::Criterion) {
    let dataset = iris();
    c.bench_function("describe all columns", |b| {
        b.iter(|| Describe::try_from(&dataset))
    });
}

fn encoding_artifact(c: &mut criterion::Criterion) {
    let pipeline = Pipeline::fit(&iris()).expect("fit");
    c.bench_function("encode pipeline artifact", |b| {
        b.iter(|| {
            let mut bytes = Vec::new();
            pipeline.encode(&mut bytes).map(|_| bytes)
        })
    });
}

fn decoding_artifact(c: &mut criterion::Criterion) {
    let mut bytes = Vec::new();
    Pipeline::fit(&iris())
        .expect("fit")
        .encode(&mut bytes)
        .expect("encode");
    c.bench_function("decode pipeline artifact", |b| {
        b.iter(|| Pipeline::decode(&mut bytes.as_slice()))
    });
}

use irisdash::SPLIT_SEED;
use irisdash::SPLIT_TEST_FRACTION;
use irisdash::analysis::Describe;
use irisdash::dataset::ColumnMap;
use irisdash::dataset::Dataset;
use irisdash::model::Artifact;
use irisdash::model::Pipeline;
