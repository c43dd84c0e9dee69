use std::error::Error;

use arrest_profile::{foam_thickness, solve, ArrestInput, ProfileKind};
use gnuplot::*;

fn main() -> Result<(), Box<dyn Error>> {
    // -----------------------
    // 1. Set up the scenario
    // -----------------------
    // A 6 m/s impact arrested under a 1300 G/s jerk limit and a 20 G cap,
    // with at most 20 ms allowed at the cap.
    let input = ArrestInput::new(6.0, 1300.0, 20.0).with_dwell_allowance(20.0);

    // ---------------
    // 2. Solve it
    // ---------------
    let result = solve(&input);
    if !result.ok {
        let reason = result
            .reason
            .map(|r| r.to_string())
            .unwrap_or_else(|| "unknown rejection".into());
        return Err(reason.into());
    }

    // ---------------------------
    // 3. Print the summary fields
    // ---------------------------
    let shape = match result.kind {
        Some(ProfileKind::Triangular) => "triangular",
        Some(ProfileKind::Trapezoidal) => "trapezoidal",
        None => "none",
    };
    println!("Profile shape:        {shape}");
    println!("Peak deceleration:    {:.2} G", result.peak_g);
    println!("Ramp time (each):     {:.2} ms", result.t1 * 1e3);
    println!("Plateau:              {:.2} ms", result.t2 * 1e3);
    println!("Total stop time:      {:.2} ms", result.total_time * 1e3);
    println!("Stop distance:        {:.2} cm", result.stop_distance * 100.0);
    println!("Time over 38 G:       {:.2} ms", result.time_over_38g * 1e3);
    println!("Time over 20 G:       {:.2} ms", result.time_over_20g * 1e3);
    println!("Dwell at cap ok:      {}", result.dwell_ok);

    // Foam sized for the stop distance at a 30% compression capacity.
    let thickness_cm = foam_thickness(result.stop_distance * 100.0, 30.0);
    println!("Foam thickness @30%:  {thickness_cm:.2} cm");

    if result.over_dwell_limits() {
        eprintln!("Warning: profile exceeds the draft-norm dwell limits.");
    }

    // -------------------------
    // 4. Collect the series
    // -------------------------
    let time_axis: Vec<f64> = result.samples.iter().map(|p| p.t * 1e3).collect();
    let decel_g: Vec<f64> = result.samples.iter().map(|p| p.a_g).collect();
    let speeds: Vec<f64> = result.samples.iter().map(|p| p.vel).collect();
    let displacement_cm: Vec<f64> = result.samples.iter().map(|p| p.pos * 100.0).collect();

    // --------------
    // 5. Plot data
    // --------------
    // A single figure with deceleration, residual speed and displacement
    // over the arrest event. Requires gnuplot to be installed.
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Impact arrest profile", &[]);
        axes.set_x_label("Time (ms)", &[]);
        axes.set_y_label("Deceleration / speed / displacement", &[]);
        axes.lines(&time_axis, &decel_g, &[Color("red"), Caption("Deceleration (G)")]);
        axes.lines(&time_axis, &speeds, &[Color("blue"), Caption("Speed (m/s)")]);
        axes.lines(
            &time_axis,
            &displacement_cm,
            &[Color("green"), Caption("Displacement (cm)")],
        );
    }

    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;

    println!(
        "Plot generated. Total arrest time: {:.3} seconds.",
        result.total_time
    );
    Ok(())
}
