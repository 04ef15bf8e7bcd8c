use sailing::{builtins, WaveField};

const H: f32 = 0.02;
const TOL: f32 = 1e-4;

fn assert_gradient_matches(sea: &WaveField, x: f32, z: f32, t: f32) {
    let s = sea.slope(x, z, t);
    let fd_x = (sea.height(x + H, z, t) - sea.height(x - H, z, t)) / (2.0 * H);
    let fd_z = (sea.height(x, z + H, t) - sea.height(x, z - H, t)) / (2.0 * H);
    assert!(
        (s.x - fd_x).abs() < TOL && (s.y - fd_z).abs() < TOL,
        "slope ({}, {}) vs finite difference ({}, {}) at x={} z={} t={}",
        s.x,
        s.y,
        fd_x,
        fd_z,
        x,
        z,
        t
    );
}

#[test]
fn slope_is_the_gradient_of_height() {
    let sea = WaveField::default();
    for ix in -5..=5 {
        for iz in -5..=5 {
            for it in 0..8 {
                let x = ix as f32 * 2.1;
                let z = iz as f32 * 1.9;
                let t = it as f32 * 0.97;
                assert_gradient_matches(&sea, x, z, t);
            }
        }
    }
}

#[test]
fn gradient_holds_for_other_seas() {
    // Slope is derived from the same trains, so a different sea stays consistent.
    let sea = builtins::choppy_sea();
    for i in 0..40 {
        let x = (i as f32 * 0.77).sin() * 9.0;
        let z = (i as f32 * 1.31).cos() * 9.0;
        let t = i as f32 * 0.15;
        assert_gradient_matches(&sea, x, z, t);
    }
}

#[test]
fn sea_moves_over_time() {
    let sea = WaveField::default();
    let h0 = sea.height(1.0, 1.0, 0.0);
    let h1 = sea.height(1.0, 1.0, 1.0);
    assert!((h0 - h1).abs() > 1e-3, "h0={h0} h1={h1}");
    // Peak height is bounded by the summed amplitudes
    for i in 0..500 {
        let h = sea.height(i as f32 * 0.37, i as f32 * -0.21, i as f32 * 0.05);
        assert!(h.abs() <= 0.18 + 0.14 + 0.08 + 1e-6);
    }
}
