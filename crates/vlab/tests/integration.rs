//! Integration tests for the virtual lab.

use approx::assert_relative_eq;
use vlab::{
    ApiRequest, ApiResponse, ExperimentKind, LabConfig, Quantity, Route, Session, Stage,
    stage_for_slug,
    vlab_auth::{Credentials, MemoryStore, RequestGate},
    vlab_content::{Certificate, Quiz, QuizState, Resolved},
    vlab_physics::{Lens, Pendulum, Projectile, Spring, Wave, lens::ImageKind},
};

fn default_stage(kind: ExperimentKind) -> Stage {
    Stage::new(kind, &LabConfig::default().scene)
}

#[test]
fn test_projectile_reference_readouts() {
    let stage = default_stage(ExperimentKind::Projectile);
    let text: Vec<String> = stage.readouts().iter().map(ToString::to_string).collect();
    assert_eq!(
        text,
        [
            "Range (R): 22.96 m",
            "Max Height (H): 5.74 m",
            "Time of Flight (T): 2.16 s",
        ]
    );
}

#[test]
fn test_range_maximal_at_45_degrees() {
    for velocity in [5.0, 15.0, 37.0, 60.0] {
        let ranges: Vec<(i32, f64)> = (15..=80)
            .map(|a| (a, Projectile::new(velocity, a as f64).derived().range))
            .collect();
        let best = ranges
            .iter()
            .fold(ranges[0], |acc, &x| if x.1 > acc.1 { x } else { acc });
        assert_eq!(best.0, 45, "u = {velocity}");
    }
}

#[test]
fn test_pendulum_period_independent_of_amplitude() {
    let mut stage = default_stage(ExperimentKind::Pendulum);
    stage.set_param("length", 4.0).unwrap();
    stage.set_param("amplitude", 0.05).unwrap();
    let a = stage.readouts();
    stage.set_param("amplitude", 0.8).unwrap();
    let b = stage.readouts();
    assert_eq!(a, b);
    assert_relative_eq!(Pendulum::new(4.0, 0.3).derived().period, 4.014, epsilon = 1e-3);
}

#[test]
fn test_lens_regions() {
    for f in [0.5, 2.0, 9.5] {
        assert_eq!(Lens::new(f, f).nature().kind, ImageKind::AtInfinity);
        assert_eq!(Lens::new(f * 3.0, f).nature().kind, ImageKind::Real);
        assert_eq!(Lens::new(f * 0.5, f).nature().kind, ImageKind::Virtual);
    }

    let mut stage = default_stage(ExperimentKind::Lens);
    stage.set_param("object_distance", 6.0).unwrap();
    stage.set_param("focal_length", 2.0).unwrap();
    assert_eq!(stage.readouts()[0].to_string(), "Image Distance (v): 3.00 m");
}

#[test]
fn test_spring_reference() {
    let d = Spring::new(4.0, 1.0).derived();
    assert_relative_eq!(d.frequency, 0.318, epsilon = 1e-3);
    assert_relative_eq!(d.period, 3.14, epsilon = 2e-3);
}

#[test]
fn test_wave_zero_speed_period_is_infinite() {
    let d = Wave::new(0.0, 0.2).derived();
    assert_eq!(d.period, Quantity::Infinite);
    assert_eq!(d.period.to_string(), "\u{221E}");
}

#[test]
fn test_readouts_bit_identical() {
    for kind in ExperimentKind::ALL {
        let stage = default_stage(kind);
        let a = stage.readouts();
        let b = default_stage(kind).readouts();
        for (x, y) in a.iter().zip(&b) {
            match (x.value, y.value) {
                (Quantity::Finite(p), Quantity::Finite(q)) => assert_eq!(p.to_bits(), q.to_bits()),
                (p, q) => assert_eq!(p, q),
            }
        }
    }
}

#[test]
fn test_parameters_always_in_range() {
    for kind in ExperimentKind::ALL {
        let mut stage = default_stage(kind);
        let specs = stage.store().specs();
        for spec in specs {
            for v in [spec.min - 100.0, spec.max + 100.0, f64::INFINITY, f64::NAN] {
                let _ = stage.set_param(spec.key, v);
                let current = stage.store().value(spec.key);
                assert!(spec.contains(current), "{kind} {} = {current}", spec.key);
            }
        }
        for r in stage.readouts() {
            assert!(!r.value_text().contains("NaN"), "{kind}: {r}");
            assert!(!r.value_text().contains("inf"), "{kind}: {r}");
        }
    }
}

#[test]
fn test_stage_by_route_slug() {
    let config = LabConfig::default();
    for kind in ExperimentKind::ALL {
        let route = Route::Experiment(kind);
        let stage = stage_for_slug(route.path(), &config).unwrap();
        assert_eq!(stage.kind(), kind);
    }
    assert!(stage_for_slug("/quiz", &config).is_err());
    assert_eq!(Route::resolve("/unknown"), Resolved::Redirect(Route::Home));
}

#[test]
fn test_camera_not_reset_by_parameters() {
    let mut stage = default_stage(ExperimentKind::Wave);
    stage.camera_mut().rotate(120.0, 30.0);
    let camera = stage.camera().clone();
    for v in [0.5, 1.5, 4.0] {
        stage.set_param("speed", v).unwrap();
        stage.tick(1.0 / 60.0);
    }
    assert_eq!(stage.camera(), &camera);
}

#[test]
fn test_quiz_full_score_and_restart() {
    let mut quiz = Quiz::default();
    while let Some((_, q)) = quiz.current() {
        quiz.select(q.correct).unwrap();
        quiz.advance().unwrap();
    }
    assert_eq!(quiz.score(), quiz.len());
    quiz.restart().unwrap();
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.state(), QuizState::Asking { index: 0 });
}

#[test]
fn test_login_then_expired_token() {
    let config = LabConfig::default();
    let gate = RequestGate::new();
    let mut session = Session::new(MemoryStore::new());

    let guard = gate.try_begin().unwrap();
    let req = ApiRequest::login(&Credentials {
        username: "ada".into(),
        password: "secret".into(),
    })
    .unwrap();
    assert_eq!(req.url(&config.api.base_url), "http://localhost:5000/api/login");
    assert!(gate.try_begin().is_none());

    let resp = ApiResponse::new(
        200,
        r#"{"token":"t0k","user":{"id":2,"username":"ada","email":"a@b.c","created_at":"2024-01-02T03:04:05"}}"#,
    );
    session.begin(&resp.login().unwrap());
    drop(guard);
    assert!(session.is_logged_in());

    let token = session.token().unwrap();
    let me = ApiRequest::me(&token);
    assert_eq!(me.headers()[1].1, "Bearer t0k");

    let err = ApiResponse::new(401, r#"{"error":"Token has expired"}"#).me().unwrap_err();
    assert!(session.apply_error(&err));
    assert!(session.token().is_none());
    assert!(session.user().is_none());
}

#[test]
fn test_certificate_from_member_date() {
    let session = {
        let mut s = Session::new(MemoryStore::new());
        let resp = ApiResponse::new(
            200,
            r#"{"token":"x","user":{"id":1,"username":"grace","email":"g@h.i","created_at":"2023-12-31"}}"#,
        );
        s.begin(&resp.login().unwrap());
        s
    };
    let user = session.user().unwrap();
    let date = user.member_since().unwrap();
    let cert = Certificate::new(&user.username, date);
    let lines = cert.lines();
    assert_eq!(lines[2].text, "grace");
    assert_eq!(lines[4].text, "Date: 2023-12-31");
    assert_eq!(date, chrono::NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
}
