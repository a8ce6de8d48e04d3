/// A clamped piecewise-linear mapping from an input range to an output range.
///
/// `input` must be sorted ascending. Values outside the input range map to the nearest end of
/// the output range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform<const N: usize> {
    #[cfg_attr(feature = "serde", serde(with = "serde_arrays"))]
    pub input: [f32; N],
    #[cfg_attr(feature = "serde", serde(with = "serde_arrays"))]
    pub output: [f32; N],
}

impl<const N: usize> Transform<N> {
    pub fn new(input: [f32; N], output: [f32; N]) -> Self {
        debug_assert!(N >= 2, "Transform needs at least two stops");
        debug_assert!(
            input.windows(2).all(|w| w[0] <= w[1]),
            "Transform input must be sorted ascending"
        );
        Self { input, output }
    }

    pub fn map(&self, value: f32) -> f32 {
        if N == 0 {
            return value;
        }
        if value <= self.input[0] {
            return self.output[0];
        }
        if value >= self.input[N - 1] {
            return self.output[N - 1];
        }
        for i in 1..N {
            let (lo, hi) = (self.input[i - 1], self.input[i]);
            if value <= hi {
                let span = hi - lo;
                if span <= 0.0 {
                    return self.output[i];
                }
                let t = (value - lo) / span;
                return self.output[i - 1] + (self.output[i] - self.output[i - 1]) * t;
            }
        }
        self.output[N - 1]
    }
}

/// Horizontal drag to card tilt: ±150 units of travel tilt the card by ±15 degrees.
pub fn drag_rotate() -> Transform<3> {
    Transform::new([-150.0, 0.0, 150.0], [-15.0, 0.0, 15.0])
}

/// Vertical drag to card scale: lifting shrinks slightly, pulling down grows slightly.
pub fn drag_scale() -> Transform<3> {
    Transform::new([-120.0, 0.0, 200.0], [0.98, 1.0, 1.03])
}

#[cfg(feature = "serde")]
mod serde_arrays {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer, const N: usize>(
        values: &[f32; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        values.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>, const N: usize>(
        deserializer: D,
    ) -> Result<[f32; N], D::Error> {
        let values = Vec::<f32>::deserialize(deserializer)?;
        let len = values.len();
        values
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"a fixed number of stops"))
    }
}
