use anyhow::Result;
use std::sync::Arc;
use toh_core::{
    record::{BufferedRecorder, NullRecorder},
    util::eval_with_recorder,
    Configurable, DefaultEvaluator, Env, Evaluator as _, Policy,
};
use toh_env::{
    error::TohError,
    Move, RandomPolicy, RandomPolicyConfig, RenderMode, State, TohAct, TohEnv, TohEnvConfig,
    TohMdp, TohObs,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Replays a fixed list of moves, then keeps repeating the last one.
struct Script {
    actions: Vec<usize>,
    cursor: usize,
}

impl Script {
    fn new(env: &TohEnv, moves: &[(usize, usize)]) -> Self {
        let actions = moves
            .iter()
            .map(|&(source, dest)| {
                env.mdp()
                    .actions()
                    .index_of(Move::new(source, dest))
                    .unwrap()
            })
            .collect();
        Self { actions, cursor: 0 }
    }
}

impl Policy<TohEnv> for Script {
    fn sample(&mut self, _: &TohObs) -> TohAct {
        let a = self.actions[self.cursor.min(self.actions.len() - 1)];
        self.cursor += 1;
        a.into()
    }
}

/// Resets until the episode starts from the canonical start state.
fn reset_to_start(env: &mut TohEnv) -> Result<()> {
    let start = State::initial(env.mdp().n_poles(), env.mdp().n_rings());
    let mut ix = 0;
    loop {
        env.reset_with_index(ix)?;
        if env.state() == Some(&start) {
            return Ok(());
        }
        ix += 1;
    }
}

#[test]
fn test_solve_two_rings() -> Result<()> {
    init();
    let config = TohEnvConfig::default().rings(2).step_reward(-0.1);
    let mut env = TohEnv::build(&config, 0)?;
    reset_to_start(&mut env)?;
    assert_eq!(env.last_move(), None);

    let mut policy = Script::new(&env, &[(0, 1), (0, 2), (1, 2)]);
    let mut rewards = vec![];
    loop {
        let act = policy.sample(&TohObs::from(0));
        let (step, record) = env.step(&act)?;
        assert_eq!(step.info.prob, 1.0);
        assert_eq!(record.get_scalar("prob")?, 1.0);
        rewards.push(step.reward[0]);
        if step.is_done() {
            assert_eq!(step.is_terminated[0], 1);
            assert_eq!(record.get_string("move")?, "Pole 2 to Pole 3");
            break;
        }
    }

    assert_eq!(rewards, vec![-0.1, -0.1, 1.0]);
    assert_eq!(env.state(), Some(&State::goal(3, 2)));
    assert_eq!(env.last_move(), Some(Move::new(1, 2)));
    Ok(())
}

#[test]
fn test_illegal_move_terminates() -> Result<()> {
    init();
    let config = TohEnvConfig::default().rings(2).invalid_reward(-1.0);
    let mut env = TohEnv::build(&config, 0)?;
    reset_to_start(&mut env)?;

    let mut policy = Script::new(&env, &[(0, 1), (0, 1)]);
    let (step, _) = env.step(&policy.sample(&TohObs::from(0)))?;
    assert!(!step.is_done());
    let before = env.state().cloned();

    let (step, _) = env.step(&policy.sample(&step.obs))?;
    assert!(step.is_done());
    assert_eq!(step.reward, vec![-1.0]);
    assert_eq!(env.state().cloned(), before);
    Ok(())
}

#[test]
fn test_truncation() -> Result<()> {
    init();
    // Moving the small ring back and forth never ends the episode.
    let config = TohEnvConfig::default().max_steps(Some(5));
    let mut env = TohEnv::build(&config, 0)?;
    reset_to_start(&mut env)?;
    let mut policy = Script::new(&env, &[(0, 1), (1, 0), (0, 1), (1, 0), (0, 1)]);

    let mut n_steps = 0;
    loop {
        let (step, _) = env.step(&policy.sample(&TohObs::from(0)))?;
        n_steps += 1;
        if step.is_done() {
            assert_eq!(step.is_terminated[0], 0);
            assert_eq!(step.is_truncated[0], 1);
            break;
        }
    }
    assert_eq!(n_steps, 5);
    Ok(())
}

#[test]
fn test_step_with_reset() -> Result<()> {
    init();
    let config = TohEnvConfig::default().rings(2);
    let mut env = TohEnv::build(&config, 0)?;
    reset_to_start(&mut env)?;
    let mut policy = Script::new(&env, &[(0, 1), (0, 2), (1, 2)]);

    for _ in 0..2 {
        let (step, _) = env.step_with_reset(&policy.sample(&TohObs::from(0)))?;
        assert!(!step.is_done());
    }
    let (step, _) = env.step_with_reset(&policy.sample(&TohObs::from(0)))?;
    assert!(step.is_done());
    assert!(env.mdp().is_goal(step.obs.state));
    assert_eq!(env.state(), Some(env.mdp().state(step.init_obs.state)));
    assert_eq!(env.last_move(), None);
    Ok(())
}

#[test]
fn test_reset_with_index_is_reproducible() -> Result<()> {
    init();
    let config = TohEnvConfig::default().rings(4);
    let mut env1 = TohEnv::build(&config, 1)?;
    let mut env2 = TohEnv::build(&config, 2)?;
    for ix in 0..10 {
        assert_eq!(env1.reset_with_index(ix)?, env2.reset_with_index(ix)?);
    }
    Ok(())
}

#[test]
fn test_shared_mdp() -> Result<()> {
    init();
    let config = TohEnvConfig::default();
    let mdp = Arc::new(TohMdp::new(&config)?);
    let mut envs = (0..4)
        .map(|seed| TohEnv::from_mdp(mdp.clone(), &config, seed))
        .collect::<Vec<_>>();
    for env in envs.iter_mut() {
        env.reset()?;
        assert!(Arc::ptr_eq(env.mdp(), &mdp));
    }
    assert_eq!(Arc::strong_count(&mdp), 5);
    Ok(())
}

#[test]
fn test_ansi_frames_in_records() -> Result<()> {
    init();
    let config = TohEnvConfig::default()
        .rings(2)
        .render_mode(Some(RenderMode::Ansi));
    let mut env = TohEnv::build(&config, 0)?;
    reset_to_start(&mut env)?;

    let frame = env.render(RenderMode::Ansi)?.unwrap();
    assert!(frame.starts_with('\n'));

    let mut policy = Script::new(&env, &[(0, 2)]);
    let (_, record) = env.step(&policy.sample(&TohObs::from(0)))?;
    let frame = record.get_string("frame")?;
    assert!(frame.starts_with("Pole 1 to Pole 3\n"));
    assert_eq!(Some(frame), env.render(RenderMode::Ansi)?);
    Ok(())
}

#[test]
fn test_render_before_reset_fails() -> Result<()> {
    let env = TohEnv::build(&TohEnvConfig::default(), 0)?;
    assert!(env.render(RenderMode::Ansi).is_err());
    Ok(())
}

#[test]
fn test_default_evaluator() -> Result<()> {
    init();
    let config = TohEnvConfig::default()
        .rings(3)
        .step_reward(-0.01)
        .invalid_reward(-1.0)
        .max_steps(Some(200));
    let n_acts = TohEnv::build(&config, 0)?.n_actions();
    let policy_config = RandomPolicyConfig { n_acts, seed: 42 };

    let mut evaluator = DefaultEvaluator::<TohEnv>::new(&config, 0, 10)?;
    let record = evaluator.evaluate(&mut RandomPolicy::build(policy_config.clone())?)?;
    let r = record.get_scalar("Episode return")?;
    assert!(r <= 1.0 && r >= -3.0, "{}", r);
    assert!(record.get_scalar("Episode length")? >= 1.0);

    // Same seeds, same result.
    let mut evaluator = DefaultEvaluator::<TohEnv>::new(&config, 0, 10)?;
    let record = evaluator.evaluate(&mut RandomPolicy::build(policy_config)?)?;
    assert_eq!(record.get_scalar("Episode return")?, r);
    Ok(())
}

#[test]
fn test_eval_with_recorder() -> Result<()> {
    init();
    let config = TohEnvConfig::default().rings(2).max_steps(Some(50));
    let mut env = TohEnv::build(&config, 3)?;
    let mut policy = RandomPolicy::build(RandomPolicyConfig {
        n_acts: env.n_actions(),
        seed: 3,
    })?;

    let mut recorder = BufferedRecorder::new();
    let returns = eval_with_recorder(&mut env, &mut policy, 3, &mut recorder)?;
    assert_eq!(returns.len(), 3);
    assert!(!recorder.is_empty());
    for record in recorder.iter() {
        assert!(record.get_scalar("episode")? < 3.0);
        assert!(record.get_scalar("prob").is_ok());
        assert!(record.get_string("move").is_ok());
    }

    let returns = eval_with_recorder(&mut env, &mut policy, 2, &mut NullRecorder::default())?;
    assert_eq!(returns.len(), 2);
    Ok(())
}

#[test]
fn test_policy_from_yaml() -> Result<()> {
    let dir = tempdir::TempDir::new("random_policy")?;
    let path = dir.path().join("random_policy.yaml");
    std::fs::write(&path, "n_acts: 6\nseed: 7\n")?;

    let mut policy = RandomPolicy::build_from_path(&path)?;
    for _ in 0..100 {
        assert!(policy.sample(&TohObs::from(0)).act < 6);
    }

    std::fs::write(&path, "n_acts: 0\nseed: 7\n")?;
    let err = RandomPolicy::build_from_path(&path).err().unwrap();
    assert!(matches!(
        err.downcast_ref::<TohError>(),
        Some(TohError::InvalidConfig(_))
    ));
    Ok(())
}
