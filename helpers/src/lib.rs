pub mod buffer;
pub mod general;

#[cfg(test)]
mod buffer_tests {
    use crate::buffer::RingBuffer;
    use approx::assert_ulps_eq;

    #[test]
    fn test_ringbuffer_empty() {
        let x: RingBuffer<u32> = RingBuffer::new(5);
        assert!(x.get_avg().is_none());
        assert!(x.is_empty());
    }
    #[test]
    fn test_ringbuffer_partially_filled() {
        let mut x: RingBuffer<u32> = RingBuffer::new(5);
        x.push(16);
        x.push(17);
        assert_eq!(x.len(), 2);
        assert_ulps_eq!(x.get_avg().unwrap(), 16.5);
    }
    #[test]
    fn test_ringbuffer_overwrites_oldest() {
        let mut x: RingBuffer<u32> = RingBuffer::new(3);
        x.push(10);
        x.push(20);
        x.push(30);
        x.push(40);
        assert_eq!(x.len(), 3);
        assert_ulps_eq!(x.get_avg().unwrap(), 30.0);
    }
    #[test]
    fn test_ringbuffer_zero_capacity() {
        let mut x: RingBuffer<f32> = RingBuffer::new(0);
        x.push(1.0);
        x.push(3.0);
        assert_ulps_eq!(x.get_avg().unwrap(), 3.0);
    }
}

#[cfg(test)]
mod general_tests {
    use crate::general::{is_non_negative, is_within, InputValueError};

    #[test]
    fn test_is_non_negative() {
        assert!(is_non_negative(0.0));
        assert!(is_non_negative(2.5));
        assert!(!is_non_negative(-0.001));
        assert!(!is_non_negative(f64::NAN));
    }
    #[test]
    fn test_is_within() {
        assert!(is_within(-1.0, -1.0, 1.0));
        assert!(is_within(1.0, -1.0, 1.0));
        assert!(!is_within(1.5, -1.0, 1.0));
        assert!(!is_within(f64::NAN, -1.0, 1.0));
    }
    #[test]
    fn test_input_value_error_display() {
        assert_eq!(InputValueError.to_string(), "Invalid input value");
    }
}
