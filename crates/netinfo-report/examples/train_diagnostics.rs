//! Print weight and blob diagnostics for a small synthetic network
//!
//! Run with: cargo run --example train_diagnostics

use netinfo_core::net::{Layer, Net, Tensor};
use netinfo_core::sink::WriteSink;
use netinfo_report::get_info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_tensor(rng: &mut StdRng, n: usize, scale: f32) -> Tensor<f32> {
    let values = (0..n).map(|_| rng.gen_range(-scale..scale)).collect();
    let diffs = (0..n)
        .map(|_| rng.gen_range(-scale..scale) * 1e-3)
        .collect();
    Tensor::new(values, diffs).expect("parallel buffers")
}

fn main() {
    let mut rng = StdRng::seed_from_u64(7);

    let mut net: Net<f32> = Net::new();
    net.push_layer(Layer::new(
        "conv1",
        vec![
            random_tensor(&mut rng, 75, 0.1),
            random_tensor(&mut rng, 3, 0.1),
        ],
    ));
    net.push_layer(Layer::without_params("relu1"));
    net.push_layer(Layer::new(
        "ip1",
        vec![
            random_tensor(&mut rng, 300, 0.05),
            random_tensor(&mut rng, 10, 0.05),
        ],
    ));

    net.track_tensor("data", random_tensor(&mut rng, 784, 1.0))
        .expect("unique name");
    net.track_tensor("conv1", random_tensor(&mut rng, 588, 2.0))
        .expect("unique name");
    net.track_tensor("ip1", random_tensor(&mut rng, 10, 5.0))
        .expect("unique name");

    let mut sink = WriteSink::new(std::io::stdout());

    println!("weight report:");
    get_info("weight").print(&net, &mut sink);

    println!("\nblob report:");
    get_info("blob").print(&net, &mut sink);
}
