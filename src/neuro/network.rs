//! Feed-forward network used as an agent brain.
//!
//! The network is a pure function of its inputs and weights: neuron values are
//! mutated during a pass, but the outputs depend only on inputs and weights.
//! Its serialized form is a pair of per-layer neuron counts and a flat weight
//! sequence (layer-major, neuron-major, weight-major) that round-trips
//! losslessly.

use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use serde::{Deserialize, Serialize};

use super::config::Topology;
use super::error::EvolutionError;

/// Logistic activation with configurable steepness.
#[inline]
fn logistic(x: f32, slope: f32) -> f32 {
    1.0 / (1.0 + (-x / slope).exp())
}

/// A single neuron: its last computed value and one weight per input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neuron {
    /// Last computed activation value.
    pub value: f32,
    /// One weight per neuron of the previous layer (empty on the input layer).
    pub weights: Array1<f32>,
}

impl Neuron {
    /// Creates a neuron with independent uniform-random weights in [-1, 1].
    fn random(input_count: usize) -> Self {
        Self {
            value: 0.0,
            weights: Array1::random(input_count, Uniform::new(-1.0, 1.0)),
        }
    }
}

/// An ordered group of neurons sharing the same input layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Neurons in order.
    pub neurons: Vec<Neuron>,
}

/// A feed-forward network: ordered layers from input to output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    /// Layers in compute order. Invariant: every neuron of layer `k` holds
    /// exactly as many weights as layer `k - 1` has neurons (0 for `k = 0`).
    pub layers: Vec<Layer>,
    /// Steepness of the logistic activation.
    pub activation_slope: f32,
}

/// Serialized network state: `{neuron counts per layer, flat weights}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSave {
    /// Neuron count of each layer, input to output.
    pub neurons_per_layer: Vec<usize>,
    /// All weights, flattened layer-major, neuron-major, weight-major.
    pub weights: Vec<f32>,
}

impl NetworkSave {
    /// Flat weight count implied by a sequence of per-layer neuron counts.
    pub fn expected_weight_count(neurons_per_layer: &[usize]) -> usize {
        neurons_per_layer.windows(2).map(|w| w[0] * w[1]).sum()
    }
}

impl Network {
    /// Builds a perceptron for the given topology with uniform-random weights
    /// in [-1, 1].
    pub fn perceptron(topology: &Topology, activation_slope: f32) -> Self {
        let mut layers = Vec::new();
        let mut previous = 0;
        for width in topology.layer_sizes() {
            let neurons = (0..width).map(|_| Neuron::random(previous)).collect();
            layers.push(Layer { neurons });
            previous = width;
        }
        Self {
            layers,
            activation_slope,
        }
    }

    /// Runs a deterministic feed-forward pass and returns the output layer's
    /// values in order.
    ///
    /// Inputs are assigned to input-layer neurons positionally and leniently:
    /// extra inputs are ignored, and if `inputs` is shorter than the input
    /// layer the trailing neurons keep their prior value. This tolerance is a
    /// documented policy, not an error.
    pub fn compute(&mut self, inputs: &[f32]) -> Vec<f32> {
        if let Some(first) = self.layers.first_mut() {
            for (neuron, &input) in first.neurons.iter_mut().zip(inputs) {
                neuron.value = input;
            }
        }

        for k in 1..self.layers.len() {
            let previous: Array1<f32> = self.layers[k - 1]
                .neurons
                .iter()
                .map(|n| n.value)
                .collect();
            for neuron in &mut self.layers[k].neurons {
                let sum = neuron.weights.dot(&previous);
                neuron.value = logistic(sum, self.activation_slope);
            }
        }

        self.layers
            .last()
            .map(|layer| layer.neurons.iter().map(|n| n.value).collect())
            .unwrap_or_default()
    }

    /// Serializes the network structure and weights.
    pub fn save(&self) -> NetworkSave {
        let neurons_per_layer = self.layers.iter().map(|l| l.neurons.len()).collect();
        let mut weights = Vec::new();
        for layer in &self.layers {
            for neuron in &layer.neurons {
                weights.extend(neuron.weights.iter().copied());
            }
        }
        NetworkSave {
            neurons_per_layer,
            weights,
        }
    }

    /// Rebuilds a network from its serialized form.
    ///
    /// Fails with [`EvolutionError::SaveMismatch`] when the flat weight count
    /// does not match the declared layer sizes.
    pub fn from_save(save: &NetworkSave, activation_slope: f32) -> Result<Self, EvolutionError> {
        let expected = NetworkSave::expected_weight_count(&save.neurons_per_layer);
        if expected != save.weights.len() {
            return Err(EvolutionError::SaveMismatch {
                expected,
                found: save.weights.len(),
            });
        }

        let mut layers = Vec::with_capacity(save.neurons_per_layer.len());
        let mut previous = 0;
        let mut cursor = 0;
        for &count in &save.neurons_per_layer {
            let mut neurons = Vec::with_capacity(count);
            for _ in 0..count {
                let weights = Array1::from_vec(save.weights[cursor..cursor + previous].to_vec());
                cursor += previous;
                neurons.push(Neuron {
                    value: 0.0,
                    weights,
                });
            }
            layers.push(Layer { neurons });
            previous = count;
        }

        Ok(Self {
            layers,
            activation_slope,
        })
    }
}
