use vr_combat_sim::rocket_initialize;

#[rocket::main]
async fn main() {
    rocket_initialize()
        .launch()
        .await
        .expect("Failed to launch rocket");
}
