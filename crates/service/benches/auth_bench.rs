use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use models::{Canonical, UserRole, VehicleStatus};
use service::auth::domain::LoginInput;
use service::auth::password::hash_password;
use service::auth::repository::mock::MockCredentialRepository;
use service::auth::LoginService;

fn bench_login(c: &mut Criterion) {
    let repo = Arc::new(MockCredentialRepository::default());
    repo.insert_user("bench@example.com", "Bench", "Comum", hash_password("Benchmark1").unwrap());
    let svc = LoginService::new(repo);
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("auth_login_verify", |b| {
        b.iter(|| {
            let input = LoginInput { email: "bench@example.com".into(), password: "Benchmark1".into() };
            rt.block_on(svc.login(input)).unwrap();
        });
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_accented_role", |b| {
        b.iter(|| UserRole::normalize("MECÂNICO"));
    });
    c.bench_function("normalize_no_match", |b| {
        b.iter(|| VehicleStatus::normalize("Disponivel "));
    });
}

criterion_group!(benches, bench_login, bench_normalize);
criterion_main!(benches);
