use stride::coord::Coord;
use stride::entity::Entity;
use stride::scenario::{Scenario, ScenarioError, Step, Variant};

#[test]
fn scripted_by_hand() {
    let mut p1 = Entity::new(55, 47);
    let mut p2 = Entity::new(9, 74);
    let mut p3 = Entity::new(10, 25);
    p2.move_right(5);
    assert_eq!(p2.position(), Coord::new(14, 74));
    p3.move_down(5);
    assert_eq!(p3.position(), Coord::new(10, 30));
    p1.set_x(p2.x() * p3.x());
    assert_eq!(p1.x(), 140);
    p1.set_y(p2.y() * p3.y());
    assert_eq!(p1.y(), 2220);
    p1.move_left(p2.x() / 2);
    assert_eq!(p1.x(), 133);
    p1.move_up(p2.y() / 2);
    assert_eq!(p1.y(), 2183);
    assert_eq!(p1.x() * p2.x() * p3.x(), 18620);
}

#[test]
fn default_scenario_matches_script() {
    let outcome = Scenario::default().run().unwrap();
    assert_eq!(outcome.p1, Entity::new(133, 2183));
    assert_eq!(outcome.p2, Entity::new(14, 74));
    assert_eq!(outcome.p3, Entity::new(10, 30));
    assert_eq!(outcome.check, 18620);
}

#[test]
fn variants_agree_on_check() {
    let object = Scenario::new(Variant::Object).run().unwrap();
    let procedural = Scenario::new(Variant::Procedural).run().unwrap();
    assert_eq!(object.check, procedural.check);
    assert_ne!(object.p1.y(), procedural.p1.y());
}

#[test]
fn zero_divisor_is_reported() {
    let scenario = Scenario {
        variant: Variant::Procedural,
        p3: Coord::new(1, -5),
        ..Default::default()
    };
    let err = scenario.run().unwrap_err();
    assert_eq!(
        err,
        ScenarioError::DivisionByZero {
            step: Step::SetYQuotient
        }
    );
    assert_eq!(
        err.to_string(),
        "division by zero in `p1.y = p2.y / p3.y`"
    );
}

#[test]
fn overflowing_check_is_reported() {
    let scenario = Scenario {
        p3: Coord::new(100_000, 25),
        ..Default::default()
    };
    assert_eq!(
        scenario.run(),
        Err(ScenarioError::Overflow { step: Step::Check })
    );
}

#[test]
fn overflowing_move_is_reported() {
    let scenario = Scenario {
        p2: Coord::new(i32::MAX, 0),
        ..Default::default()
    };
    let err = scenario.run().unwrap_err();
    assert_eq!(
        err,
        ScenarioError::Overflow {
            step: Step::MoveRight
        }
    );
    assert_eq!(err.to_string(), "arithmetic overflow in `p2.move_right(5)`");
}

#[test]
fn error_names_the_variant_expression() {
    let scenario = Scenario {
        p2: Coord::new(9, i32::MAX),
        p3: Coord::new(10, 25),
        ..Default::default()
    };
    let err = scenario.run().unwrap_err();
    assert_eq!(
        err.to_string(),
        "arithmetic overflow in `p1.y = p2.y * p3.y`"
    );
}
