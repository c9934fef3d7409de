//! Basic quadrature example for gaussquad-rust

use gaussquad_rust::*;
use std::f64::consts::PI;

fn main() -> Result<()> {
    println!("=== Gauss-Legendre Quadrature Examples ===\n");

    // Example 1: finite interval at double precision
    println!("1. Finite interval");
    let gauss = GaussLegendre::<f64, 15>::new();
    let (value, l1) = gauss.integrate_range_with_l1(|x: f64| x.sin(), 0.0, PI)?;
    println!("   int_0^pi sin(x) dx = {} (L1 {})", value, l1);

    // Example 2: unbounded intervals
    println!("\n2. Unbounded intervals");
    let gauss = GaussLegendre::<f64, 30>::new();
    let value = gauss.integrate_range(|x: f64| (-x * x).exp(), f64::NEG_INFINITY, f64::INFINITY)?;
    println!("   int exp(-x^2) dx = {} (sqrt(pi) = {})", value, PI.sqrt());
    let value = gauss.integrate_range(|x: f64| 1.0 / (x * x), 1.0, f64::INFINITY)?;
    println!("   int_1^inf x^-2 dx = {}", value);

    // Example 3: complex integrand
    println!("\n3. Complex integrand");
    let value = GaussLegendre::<f64, 20>::quad(|x: f64| Complex::new(x.cos(), x.sin()), 0.0, PI)?;
    println!("   int_0^pi exp(ix) dx = {}", value);

    // Example 4: wider scalar types pick their own tables
    println!("\n4. Precision tiers");
    println!("   f64:          {:?}", <f64 as CustomNumeric>::CATEGORY);
    println!("   TwoFloat:     {:?}", <TwoFloat as CustomNumeric>::CATEGORY);
    println!("   Decimal<50>:  {:?}", <Decimal<50> as CustomNumeric>::CATEGORY);
    println!("   Decimal<150>: {:?}", <Decimal<150> as CustomNumeric>::CATEGORY);

    let one = Decimal::<50>::from_f64(1.0);
    let quarter_pi = GaussLegendre::<Decimal<50>, 30>::quad(
        |x: Decimal<50>| one.clone() / (one.clone() + x.clone() * x),
        Decimal::from_f64(0.0),
        one.clone(),
    )?;
    println!("   int_0^1 1/(1+x^2) dx = {}", quarter_pi);

    // Example 5: bad bounds are reported, not panicked on
    println!("\n5. Error reporting");
    match GaussLegendre::<f64, 7>::quad(|x: f64| x, f64::NAN, 1.0) {
        Ok(value) => println!("   unexpected value {}", value),
        Err(err) => println!("   {}", err),
    }

    Ok(())
}
