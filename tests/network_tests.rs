#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use neuvol::neuro::error::EvolutionError;
use neuvol::neuro::config::Topology;
use neuvol::neuro::network::{Network, NetworkSave};

#[test]
fn test_perceptron_shape() {
    let mut network = Network::perceptron(&Topology::new(2, vec![2], 1), 1.0);

    let save = network.save();
    assert_eq!(save.neurons_per_layer, vec![2, 2, 1]);
    // Layer 0 has no inputs, layer 1 has 2x2 weights, layer 2 has 1x2.
    assert_eq!(save.weights.len(), 6);

    let layer_weight_counts: Vec<usize> = network
        .layers
        .iter()
        .map(|layer| layer.neurons.iter().map(|n| n.weights.len()).sum())
        .collect();
    assert_eq!(layer_weight_counts, vec![0, 4, 2]);

    for weight in &save.weights {
        assert!((-1.0..=1.0).contains(weight));
    }

    // Outputs are logistic activations.
    let outputs = network.compute(&[0.3, 0.7]);
    assert_eq!(outputs.len(), 1);
    assert!(outputs[0] > 0.0 && outputs[0] < 1.0);
}

#[test]
fn test_compute_is_deterministic() {
    let mut network = Network::perceptron(&Topology::new(3, vec![4, 4], 2), 1.0);

    let inputs = [0.1, -0.5, 0.9];
    let first = network.compute(&inputs);
    for _ in 0..10 {
        assert_eq!(network.compute(&inputs), first);
    }
}

#[test]
fn test_zero_weights_output_half() {
    let save = NetworkSave {
        neurons_per_layer: vec![2, 2, 1],
        weights: vec![0.0; 6],
    };
    let mut network = Network::from_save(&save, 1.0).expect("valid save");

    // Every weighted sum is zero, so every activation is exactly 0.5.
    assert_eq!(network.compute(&[42.0, -42.0]), vec![0.5]);
}

#[test]
fn test_save_round_trip_preserves_outputs() {
    let mut network = Network::perceptron(&Topology::new(2, vec![3], 2), 1.0);
    let mut restored = Network::from_save(&network.save(), 1.0).expect("round trip");

    for inputs in [[0.0, 0.0], [1.0, -1.0], [0.25, 0.75], [100.0, -0.01]] {
        assert_eq!(network.compute(&inputs), restored.compute(&inputs));
    }

    // And the save itself survives another round.
    assert_eq!(network.save(), restored.save());
}

#[test]
fn test_lenient_input_truncation() {
    let mut network = Network::perceptron(&Topology::new(3, vec![2], 1), 1.0);
    let mut twin = Network::from_save(&network.save(), 1.0).expect("round trip");

    // Extra inputs are ignored.
    let extra = network.compute(&[0.1, 0.2, 0.3, 99.0, -99.0]);
    let exact = twin.compute(&[0.1, 0.2, 0.3]);
    assert_eq!(extra, exact);

    // Short inputs leave the trailing input neurons at their prior values.
    let partial = network.compute(&[0.9]);
    let explicit = twin.compute(&[0.9, 0.2, 0.3]);
    assert_eq!(partial, explicit);
}

#[test]
fn test_save_mismatch_is_rejected() {
    let save = NetworkSave {
        neurons_per_layer: vec![2, 2, 1],
        weights: vec![0.0; 5],
    };

    match Network::from_save(&save, 1.0) {
        Err(EvolutionError::SaveMismatch { expected, found }) => {
            assert_eq!(expected, 6);
            assert_eq!(found, 5);
        }
        other => panic!("expected SaveMismatch, got {other:?}"),
    }
}

#[test]
fn test_expected_weight_count() {
    assert_eq!(NetworkSave::expected_weight_count(&[2, 2, 1]), 6);
    assert_eq!(NetworkSave::expected_weight_count(&[5]), 0);
    assert_eq!(NetworkSave::expected_weight_count(&[]), 0);
}
