//! Closed loop step response of a mass-spring-damper, written to `step_response.png`.
extern crate nalgebra as na;

use plotters::prelude::*;
use state_space_control::{Controller, Gains, LinearSystem, Simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = LinearSystem::new(
        na::SMatrix::<f64, 2, 2>::new(0.0, 1.0, -2.0, -3.0),
        na::SMatrix::<f64, 2, 1>::new(0.0, 1.0),
        na::SMatrix::<f64, 1, 2>::new(1.0, 0.0),
        na::SMatrix::<f64, 1, 1>::zeros(),
    );
    let gains = Gains::regulator(na::SMatrix::<f64, 1, 2>::new(4.0, 2.0))
        .with_estimator(na::SMatrix::<f64, 2, 1>::new(7.0, 2.0))
        .with_integral(na::SMatrix::<f64, 1, 1>::new(-6.0));

    let mut controller = Controller::new(&model, gains);
    let mut plant = Simulation::new(&model);
    controller.initialise()?;
    controller.set_reference(na::SVector::<f64, 1>::new(1.0));

    // Constant input disturbance from t = 5 s, removed by the integrator
    let disturbance = na::SVector::<f64, 1>::new(0.5);
    let dt = 0.01;
    let num_steps = 1500;

    let mut outputs = Vec::with_capacity(num_steps);
    let mut inputs = Vec::with_capacity(num_steps);
    let mut u = controller.update(&plant.output(), 0.0);
    for k in 0..num_steps {
        let t = k as f64 * dt;
        let d = if t >= 5.0 { disturbance } else { na::SVector::zeros() };
        let y = plant.step(&(u + d), dt);
        u = controller.update(&y, dt);

        outputs.push((t, y[0]));
        inputs.push((t, u[0]));
    }
    println!(
        "y(end): {:.4}, w_hat(end): {:.4}",
        plant.output()[0],
        controller.disturbance_estimate()[0]
    );

    let root = BitMapBackend::new("step_response.png", (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let t_end = num_steps as f64 * dt;
    let mut chart = ChartBuilder::on(&root)
        .caption("Closed loop step response", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..t_end, -2.0..7.0)?;

    chart.configure_mesh().x_desc("t [s]").draw()?;

    chart
        .draw_series(LineSeries::new(outputs, &RED))?
        .label("output y")
        .legend(|(x, y)| PathElement::new([(x, y), (x + 20, y)], &RED));

    chart
        .draw_series(LineSeries::new(inputs, &BLUE))?
        .label("control input u")
        .legend(|(x, y)| PathElement::new([(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
