// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Landmarks of the Priyadarshini College of Engineering campus in Nagpur,
/// as `(name, latitude, longitude)`.
pub const PCE_LANDMARKS: &[(&str, f64, f64)] = &[
    ("PCE Main Gate", 21.103063, 79.004020),
    ("First Year Canteen", 21.103954, 79.005062),
    ("Civil/Electrical", 21.103659, 79.005430),
    ("First Year Building", 21.103415, 79.005001),
    ("Swimming Pool", 21.103705, 79.006245),
    ("Sports Building", 21.102051, 79.004304),
    ("First Ground", 21.102249, 79.004838),
    ("PCE Lake", 21.102662, 79.006276),
    ("IT Garden", 21.101866, 79.006795),
    ("IT Auditorium", 21.101265, 79.005897),
    ("IT/CS/CT Department", 21.101590, 79.006817),
    ("Saraswati Temple", 21.101881, 79.005989),
    ("Library", 21.101417, 79.007840),
    ("AIDS/IOT/Robotics", 21.101714, 79.007636),
    ("Main Canteen", 21.102479, 79.007738),
    ("EE/ETC/AERO", 21.102353, 79.007597),
    ("Mahadev Temple", 21.103592, 79.007413),
    ("Mechanical & T&P", 21.101812, 79.009012),
    ("Admin Section", 21.101874, 79.009377),
    ("Mechanical Ground", 21.101601, 79.009004),
    ("MBA/BBA", 21.102040, 79.008184),
];
