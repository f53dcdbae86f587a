//! End-to-end tests through the text interface.

use casting::{format_report, parse_problem, solve, solve_str, verify, Error, SolverConfig};
use casting_test::fixtures;

fn config() -> SolverConfig {
    SolverConfig::new().with_random_seed(2024)
}

// Renders a problem back into the input format.
fn to_text(problem: &casting::CastingProblem) -> String {
    let mut text = format!(
        "{} {} {}\n",
        problem.role_count(),
        problem.scene_count(),
        problem.actor_count()
    );
    for role in problem.role_ids() {
        let actors = problem.role_actors(role);
        text.push_str(&actors.len().to_string());
        for actor in actors {
            text.push_str(&format!(" {actor}"));
        }
        text.push('\n');
    }
    for scene in 0..problem.scene_count() {
        let roles = problem.scene_roles(scene);
        text.push_str(&roles.len().to_string());
        for role in roles {
            text.push_str(&format!(" {role}"));
        }
        text.push('\n');
    }
    text
}

// Reads a report back into (actor, roles) lines and checks its shape.
fn read_report(output: &str) -> Vec<(u32, Vec<u32>)> {
    let mut lines = output.lines();
    let used: usize = lines.next().unwrap().parse().unwrap();
    let entries: Vec<(u32, Vec<u32>)> = lines
        .map(|line| {
            let numbers: Vec<u32> = line.split(' ').map(|t| t.parse().unwrap()).collect();
            assert_eq!(numbers[1] as usize, numbers.len() - 2, "line {line:?}");
            (numbers[0], numbers[2..].to_vec())
        })
        .collect();
    assert_eq!(entries.len(), used);
    entries
}

#[test]
fn shared_scene_example() {
    let output = solve_str("2 1 3\n2 1 3\n2 2 3\n2 1 2\n", &config()).unwrap();
    assert_eq!(output, "2\n2 1 2\n3 1 1\n");
}

#[test]
fn role_without_candidates_gets_overflow_actor() {
    let output = solve_str("2 1 2\n0\n1 1\n2 1 2\n", &config()).unwrap();
    assert_eq!(output, "2\n1 1 2\n3 1 1\n");
}

#[test]
fn divas_are_seeded_apart() {
    let problem = fixtures::diva_pair();
    let output = solve_str(&to_text(&problem), &config()).unwrap();

    let entries = read_report(&output);
    assert!(entries.contains(&(1, vec![1])));
    assert!(entries.contains(&(2, vec![3])));
}

#[test]
fn random_problems_round_trip_through_text() {
    for seed in 0..10 {
        let problem = fixtures::random_problem(seed, 60, 25, 20);
        let text = to_text(&problem);
        assert_eq!(parse_problem(&text).unwrap(), problem);

        let output = solve_str(&text, &config()).unwrap();
        let entries = read_report(&output);

        let mut roles: Vec<u32> = entries.iter().flat_map(|(_, r)| r.clone()).collect();
        roles.sort_unstable();
        assert_eq!(roles, (1..=60).collect::<Vec<_>>(), "seed {seed}");

        let actors: Vec<u32> = entries.iter().map(|(a, _)| *a).collect();
        assert!(actors.windows(2).all(|w| w[0] < w[1]));
        for (actor, roles) in &entries {
            if *actor > problem.actor_count() {
                assert_eq!(roles.len(), 1, "overflow actor {actor} doubled up");
            }
        }
    }
}

#[test]
fn verify_accepts_solver_output() {
    for seed in 0..10 {
        let problem = fixtures::random_problem(seed, 35, 14, 9);
        let result = solve(&problem, &config());
        verify(&problem, &result.report).unwrap();
        fixtures::assert_feasible(&problem, &result.report);
    }
}

#[test]
fn verify_accepts_overflow_actors_with_diva_ids() {
    // One real actor, so the overflow actor for role 2 is actor 2.
    let problem =
        casting::CastingProblem::new(1, vec![vec![1], vec![1]], vec![vec![1, 1, 2]]).unwrap();
    let result = solve(&problem, &SolverConfig::new().with_random_seed(1));

    assert_eq!(
        result.report.cast(),
        vec![Some(casting::ActorId::new(1)), Some(casting::ActorId::new(2))]
    );
    verify(&problem, &result.report).unwrap();

    let output = solve_str("2 1 1\n1 1\n1 1\n2 1 2\n", &config()).unwrap();
    assert_eq!(output, "2\n1 1 1\n2 1 2\n");
}

#[test]
fn verify_rejects_shared_actor() {
    let problem = fixtures::shared_scene();
    let report = casting::CastingReport::from_cast(
        3,
        &[casting::ActorId::new(3), casting::ActorId::new(3)],
    );
    match verify(&problem, &report) {
        Err(Error::Verification(violations)) => assert!(!violations.is_empty()),
        other => panic!("expected a verification error, got {other:?}"),
    }
}

#[test]
fn reported_counts_match_text() {
    let problem = fixtures::random_problem(77, 30, 10, 12);
    let result = solve(&problem, &config());
    let entries = read_report(&format_report(&result.report));

    assert_eq!(entries.len(), result.actors_used());
    assert!(result.actors_used() <= result.constructed_actors);
}

#[test]
fn malformed_input_is_reported() {
    assert!(matches!(solve_str("3 1", &config()), Err(Error::Parse(_))));
    assert!(matches!(
        solve_str("1 1 2\n1 1\n1 4\n", &config()),
        Err(Error::Problem(_))
    ));
}
