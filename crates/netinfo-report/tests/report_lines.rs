//! End-to-end line format tests over a realistic small network

use netinfo_core::net::{Layer, Net, Tensor};
use netinfo_core::sink::BufferSink;
use netinfo_report::{BlobInfo, Reporter, WeightInfo};

/// A small LeNet-flavored net: two parameterized layers, two param-free
/// ops, and a handful of tracked activations.
fn lenet_like() -> Net<f32> {
    let mut net = Net::new();

    net.push_layer(Layer::new(
        "conv1",
        vec![
            Tensor::new(vec![0.5, -0.5, 1.5, -1.5], vec![0.05, -0.05, 0.15, -0.15]).unwrap(),
            // Bias
            Tensor::new(vec![0.25, -0.75], vec![0.0, 0.5]).unwrap(),
        ],
    ));
    net.push_layer(Layer::without_params("pool1"));
    net.push_layer(Layer::new(
        "ip2",
        vec![Tensor::new(vec![2.0, -6.0], vec![-0.2, 0.6]).unwrap()],
    ));
    net.push_layer(Layer::without_params("loss"));

    net.track_tensor("data", Tensor::new(vec![0.0, 128.0, 255.0], vec![0.0, 0.0, 0.0]).unwrap())
        .unwrap();
    net.track_tensor(
        "conv1",
        Tensor::new(vec![-1.0, 4.0, -2.0], vec![0.001, -0.003, 0.002]).unwrap(),
    )
    .unwrap();
    net.track_tensor("ip2", Tensor::new(vec![-7.5, 7.5], vec![-0.1, 0.1]).unwrap())
        .unwrap();

    net
}

#[test]
fn weight_report_full_output() {
    let net = lenet_like();
    let mut sink = BufferSink::new();
    WeightInfo::new().print(&net, &mut sink);

    assert_eq!(
        sink.lines(),
        &[
            "conv1  blob0: 1e0 [1e-1]".to_string(),
            "conv1  blob1: 5e-1 [2.5e-1]".to_string(),
            "ip2    blob0: 4e0 [4e-1]".to_string(),
        ]
    );
}

#[test]
fn blob_report_full_output() {
    let net = lenet_like();
    let mut sink = BufferSink::new();
    BlobInfo::new().print(&net, &mut sink);

    assert_eq!(
        sink.lines(),
        &[
            "data   data: (2.55e2, 0e0) diff: (0e0, 0e0)".to_string(),
            "conv1  data: (4e0, -2e0) diff: (2e-3, -3e-3)".to_string(),
            "ip2    data: (7.5e0, -7.5e0) diff: (1e-1, -1e-1)".to_string(),
        ]
    );
}

#[test]
fn labels_padded_to_max_len_plus_one() {
    let net = lenet_like();

    let mut sink = BufferSink::new();
    WeightInfo::new().print(&net, &mut sink);
    // Widest reporting layer is "conv1" (5); field width is 6.
    for line in sink.lines() {
        assert!(line[..7].ends_with(' '), "no separator in {line:?}");
        assert_eq!(&line[7..11], "blob");
    }

    let mut sink = BufferSink::new();
    BlobInfo::new().print(&net, &mut sink);
    // Widest tracked name is "conv1" (5); field width is 6.
    for line in sink.lines() {
        assert_eq!(&line[7..12], "data:");
    }
}

#[test]
fn reports_are_idempotent_for_unchanged_net() {
    let net = lenet_like();
    for kind in ["weight", "blob"] {
        let reporter = Reporter::from_kind(kind).unwrap();
        let mut first = BufferSink::new();
        reporter.print(&net, &mut first);
        let mut second = BufferSink::new();
        reporter.print(&net, &mut second);
        assert_eq!(first.to_text(), second.to_text());
    }
}

#[test]
fn reporter_reusable_across_nets() {
    let reporter = Reporter::from_kind("weight").unwrap();

    let mut sink = BufferSink::new();
    reporter.print(&lenet_like(), &mut sink);
    let n_first = sink.lines().len();

    let empty: Net<f32> = Net::new();
    let mut sink2 = BufferSink::new();
    reporter.print(&empty, &mut sink2);

    assert_eq!(n_first, 3);
    assert!(sink2.lines().is_empty());
}

#[test]
fn report_reflects_mutated_state() {
    let mut net = lenet_like();
    let reporter = Reporter::from_kind("blob").unwrap();

    let mut before = BufferSink::new();
    reporter.print(&net, &mut before);

    for v in net.tensor_mut("ip2").unwrap().values_mut() {
        *v *= 2.0;
    }

    let mut after = BufferSink::new();
    reporter.print(&net, &mut after);

    assert_ne!(before.lines()[2], after.lines()[2]);
    assert!(after.lines()[2].contains("1.5e1"));
}

#[test]
fn float64_nets_are_supported() {
    let mut net: Net<f64> = Net::new();
    net.push_layer(Layer::new(
        "fc",
        vec![Tensor::new(vec![1e-8, -1e-8], vec![1e-12, -1e-12]).unwrap()],
    ));

    let mut sink = BufferSink::new();
    WeightInfo::new().print(&net, &mut sink);
    assert_eq!(sink.lines(), &["fc  blob0: 1e-8 [1e-12]".to_string()]);
}
