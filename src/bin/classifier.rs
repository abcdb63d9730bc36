use classifier::application_state::ApplicationState;
use log::info;

#[tokio::main]
async fn main() {
    // Setup logger
    let env = env_logger::Env::default();
    env_logger::init_from_env(env);

    info!("Starting flow classifier");

    let state = match ApplicationState::new() {
        Ok(s) => s,
        Err(e) => panic!("ApplicationState init error: {:?}", e),
    };

    if let Err(e) = state.serve().await {
        panic!("grpc server error: {:?}", e);
    }
}
