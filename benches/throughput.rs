use criterion::{criterion_group, criterion_main, Criterion};
use http::Method;
use routekit::query::{Direction, QueryBuilder};
use routekit::route_file::routes_from_str;
use routekit::runtime_config::RuntimeConfig;
use std::hint::black_box;

fn example_routes() -> &'static str {
    r#"
routes:
  - { method: GET, path: /, handler: root_handler }
namespaces:
  - prefix: /zoo
    routes:
      - { method: GET, path: /animals, handler: get_animals }
      - { method: POST, path: /animals, handler: create_animal }
      - { method: GET, path: /animals/:id, handler: get_animal }
      - { method: PUT, path: /animals/:id, handler: update_animal }
      - { method: PATCH, path: /animals/:id, handler: patch_animal }
      - { method: DELETE, path: /animals/:id, handler: delete_animal }
      - { method: GET, path: /animals/:id/toys/:toy_id, handler: animal_toy }
      - { method: GET, path: /:category/animals/:id/habitats/:habitat_id/sections/:section_id, handler: habitat_section }
  - prefix: /inventory
    routes:
      - { method: POST, path: /:warehouse_id/feeds/:feed_id/items/:item_id/batches/:batch_id, handler: post_item_batch }
  - prefix: /complex
    routes:
      - { method: GET, path: /:a/:b/:c/:d/:e/:f/:g/:h/:i, handler: complex_many_params }
  - prefix: /assets
    routes:
      - { method: GET, path: "/*", handler: assets }
"#
}

fn bench_route_throughput(c: &mut Criterion) {
    let router = routes_from_str(example_routes(), &RuntimeConfig::default())
        .expect("failed to load routes");
    c.bench_function("route_match", |b| {
        let test_paths = [
            (Method::GET, "/zoo/animals/123"),
            (Method::GET, "/zoo/animals/123/toys/456"),
            (Method::GET, "/zoo/cats/animals/123/habitats/88/sections/5"),
            (Method::POST, "/inventory/1/feeds/2/items/3/batches/4"),
            (Method::GET, "/complex/1/2/3/4/5/6/7/8/9"),
            (Method::GET, "/assets/css/site/main.css"),
            (Method::GET, "/does/not/exist"),
        ];
        b.iter(|| {
            for (method, path) in test_paths.iter() {
                let res = router.match_route(method, path);
                black_box(&res);
            }
        })
    });
}

fn bench_query_render(c: &mut Criterion) {
    let template = QueryBuilder::from("posts")
        .select(["id", "title"])
        .join("users", "users.id = posts.user_id")
        .where_eq([("published", true)])
        .expect("scalar condition")
        .order_by("created_at", Direction::Desc);
    c.bench_function("query_build_and_render", |b| {
        b.iter(|| {
            let sql = template
                .where_with(|q| {
                    q.col("views").gt(black_box(100)).col("lang").eq("en");
                })
                .expect("scalar condition")
                .limit(10)
                .to_query();
            black_box(sql);
        })
    });
}

criterion_group!(benches, bench_route_throughput, bench_query_render);
criterion_main!(benches);
