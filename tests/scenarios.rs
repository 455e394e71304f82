//! End-to-end rounds driven through the loop controller on a manual clock

use glam::Vec2;

use block_breaker::platform::ManualPlatform;
use block_breaker::sim::RoundOutcome;
use block_breaker::{Game, Settings};

fn start() -> Game<ManualPlatform> {
    let mut game = Game::new(Settings::default(), 7, ManualPlatform::new()).unwrap();
    game.toggle();
    game
}

/// Place the ball so that one Euler step lands it on `target`
fn aim(game: &mut Game<ManualPlatform>, target: Vec2, vel: Vec2) {
    let ball = &mut game.state_mut().ball;
    ball.vel = vel;
    ball.pos = target - vel;
}

#[test]
fn paddle_hit_spin_follows_contact_point() {
    let mut game = start();
    // Paddle spans x 350..450 with its top at y 570
    aim(&mut game, Vec2::new(400.0, 565.0), Vec2::new(3.0, 5.0));
    game.pump();
    let vel = game.state().ball.vel;
    assert!(vel.x.abs() < 1e-4);
    assert_eq!(vel.y, -5.0);

    aim(&mut game, Vec2::new(450.0, 565.0), Vec2::new(-3.0, 5.0));
    game.pump();
    let vel = game.state().ball.vel;
    assert!((vel.x - 4.0).abs() < 1e-4);
    assert_eq!(vel.y, -5.0);

    aim(&mut game, Vec2::new(350.0, 565.0), Vec2::new(3.0, 5.0));
    game.pump();
    assert!((game.state().ball.vel.x + 4.0).abs() < 1e-4);
}

#[test]
fn clearing_every_block_wins_once_then_resets() {
    let mut game = start();
    let targets: Vec<Vec2> = game
        .state()
        .blocks
        .iter()
        .map(|b| b.pos + Vec2::new(b.width, b.height) / 2.0)
        .collect();
    assert_eq!(targets.len(), 60);

    for (i, target) in targets.into_iter().enumerate() {
        aim(&mut game, target, Vec2::new(0.0, 2.0));
        assert!(game.pump(), "frame {i} should have been scheduled");
        if i < 59 {
            assert_eq!(game.state().score, (i as u64 + 1) * 10);
            assert!(game.platform().notifications.is_empty());
        }
    }

    let platform = game.platform();
    assert_eq!(platform.notifications, vec![RoundOutcome::Won]);
    assert!(platform.readouts.contains(&(600, 3)));
    assert_eq!(platform.last_readout(), Some((0, 3)));

    let state = game.state();
    assert!(!state.running);
    assert_eq!(state.score, 0);
    assert_eq!(state.lives, 3);
    assert_eq!(state.visible_blocks(), 60);
    assert!(!game.pump());
}

#[test]
fn three_falls_end_the_game() {
    let mut game = start();
    // Far from the paddle so it cannot catch the ball
    let fall = Vec2::new(50.0, 595.0);

    aim(&mut game, fall, Vec2::new(0.0, 5.0));
    game.pump();
    assert_eq!(game.state().lives, 2);
    assert!(game.state().running);
    assert_eq!(game.state().ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(game.state().ball.vel.y, -5.0);
    assert_eq!(game.state().ball.vel.x.abs(), 5.0);

    aim(&mut game, fall, Vec2::new(0.0, 5.0));
    game.pump();
    assert_eq!(game.state().lives, 1);
    assert!(game.platform().notifications.is_empty());

    aim(&mut game, fall, Vec2::new(0.0, 5.0));
    game.pump();

    let platform = game.platform();
    assert_eq!(platform.notifications, vec![RoundOutcome::GameOver]);
    assert_eq!(
        platform.readouts,
        vec![(0, 3), (0, 2), (0, 1), (0, 0), (0, 3)]
    );
    assert!(!game.is_running());
    assert_eq!(game.state().lives, 3);
    assert!(!game.pump());
}

#[test]
fn life_loss_keeps_blocks_and_score() {
    let mut game = start();
    let target = {
        let b = &game.state().blocks[0];
        b.pos + Vec2::new(b.width, b.height) / 2.0
    };
    aim(&mut game, target, Vec2::new(0.0, 2.0));
    game.pump();
    aim(&mut game, Vec2::new(50.0, 595.0), Vec2::new(0.0, 5.0));
    game.pump();

    let state = game.state();
    assert_eq!(state.score, 10);
    assert_eq!(state.lives, 2);
    assert_eq!(state.visible_blocks(), 59);
}

#[test]
fn pause_freezes_the_field() {
    let mut game = start();
    game.key_down("ArrowLeft");
    for _ in 0..3 {
        game.pump();
    }

    game.key_down(" ");
    assert!(!game.is_running());
    let ball = game.state().ball.clone();
    let paddle_x = game.state().paddle.pos.x;

    // The already scheduled frame still runs and draws the overlay
    assert!(game.pump());
    for _ in 0..10 {
        assert!(!game.pump());
        // A stray host callback must not advance anything either
        game.frame();
    }

    assert_eq!(game.state().ball, ball);
    assert_eq!(game.state().paddle.pos.x, paddle_x);
    assert_eq!(game.draw_list().texts().count(), 1);

    game.key_up(" ");
    game.key_down(" ");
    assert!(game.is_running());
    game.pump();
    assert_ne!(game.state().ball.pos, ball.pos);
}
