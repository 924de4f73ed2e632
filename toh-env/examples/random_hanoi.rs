use anyhow::Result;
use toh_core::{Configurable, DefaultEvaluator, Env as _, Evaluator as _};
use toh_env::{RandomPolicy, RandomPolicyConfig, RenderMode, TohEnv, TohEnvConfig};

type Evaluator = DefaultEvaluator<TohEnv>;

fn env_config() -> TohEnvConfig {
    TohEnvConfig::default()
        .poles(3)
        .rings(3)
        .noise(0.1)
        .step_reward(-0.01)
        .invalid_reward(-1.0)
        .max_steps(Some(100))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let env_config = env_config().render_mode(Some(RenderMode::Human));
    let n_acts = TohEnv::build(&env_config, 0)?.n_actions();
    let mut policy = RandomPolicy::build(RandomPolicyConfig { n_acts, seed: 42 })?;

    let record = Evaluator::new(&env_config, 0, 5)?.evaluate(&mut policy)?;
    println!("Episode return: {}", record.get_scalar("Episode return")?);

    Ok(())
}

#[test]
fn test_random_hanoi() {
    let env_config = env_config();
    let n_acts = TohEnv::build(&env_config, 0).unwrap().n_actions();
    let mut policy = RandomPolicy::build(RandomPolicyConfig { n_acts, seed: 42 }).unwrap();

    let _ = Evaluator::new(&env_config, 0, 5)
        .unwrap()
        .evaluate(&mut policy)
        .unwrap();
}
