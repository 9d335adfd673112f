//! Seed rows for the `cars` table.

use carl_types::{Category, FuelType, Transmission};

use super::CarSeed;

/// The 57 cars loaded on every provisioning run, grouped by category.
pub const CATALOG: &[CarSeed] = &[
    // Economy
    CarSeed {
        name: "Volkswagen Polo",
        year: 1996,
        displacement_cc: 1390,
        power_hp: 60,
        trunk_litres: 245,
        price_per_day: 2000,
        image_url: Some("https://upload.wikimedia.org/wikipedia/commons/6/67/VW_Polo_front_20090329.jpg"),
        category: Category::Economy,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Peugeot 206",
        year: 2003,
        displacement_cc: 1360,
        power_hp: 75,
        trunk_litres: 245,
        price_per_day: 3000,
        image_url: Some("https://upload.wikimedia.org/wikipedia/commons/2/21/2002_Peugeot_206_LX_1.4_Front.jpg"),
        category: Category::Economy,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Mini Cooper",
        year: 2002,
        displacement_cc: 1598,
        power_hp: 174,
        trunk_litres: 350,
        price_per_day: 2500,
        image_url: Some("https://upload.wikimedia.org/wikipedia/commons/e/e0/Mini_One_%28R50%29_%E2%80%93_Frontansicht%2C_12._Juni_2011%2C_D%C3%BCsseldorf.jpg"),
        category: Category::Economy,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 4,
    },
    CarSeed {
        name: "Alfa Romeo Giulietta",
        year: 2012,
        displacement_cc: 1368,
        power_hp: 170,
        trunk_litres: 350,
        price_per_day: 4000,
        image_url: Some("https://upload.wikimedia.org/wikipedia/commons/7/76/2011_Alfa_Romeo_Giulietta_Veloce_JTDm-2_2.0_Front.jpg"),
        category: Category::Economy,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Seat Ibiza",
        year: 2005,
        displacement_cc: 1390,
        power_hp: 75,
        trunk_litres: 267,
        price_per_day: 2500,
        image_url: Some("https://upload.wikimedia.org/wikipedia/commons/0/0d/Seat_Ibiza_3-door_silver.jpg"),
        category: Category::Economy,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Opel Corsa",
        year: 2008,
        displacement_cc: 1229,
        power_hp: 80,
        trunk_litres: 285,
        price_per_day: 2500,
        image_url: None,
        category: Category::Economy,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Renault Clio",
        year: 2010,
        displacement_cc: 1149,
        power_hp: 75,
        trunk_litres: 288,
        price_per_day: 2500,
        image_url: None,
        category: Category::Economy,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Suzuki Swift",
        year: 2014,
        displacement_cc: 1242,
        power_hp: 94,
        trunk_litres: 211,
        price_per_day: 3000,
        image_url: None,
        category: Category::Economy,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Toyota Yaris Hybrid",
        year: 2017,
        displacement_cc: 1497,
        power_hp: 100,
        trunk_litres: 286,
        price_per_day: 5000,
        image_url: None,
        category: Category::Economy,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Hybrid,
        seats: 5,
    },
    CarSeed {
        name: "Fiat 500",
        year: 2015,
        displacement_cc: 1242,
        power_hp: 69,
        trunk_litres: 185,
        price_per_day: 3000,
        image_url: None,
        category: Category::Economy,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 4,
    },
    // Compact
    CarSeed {
        name: "Volvo V40",
        year: 2014,
        displacement_cc: 1969,
        power_hp: 150,
        trunk_litres: 335,
        price_per_day: 10_000,
        image_url: Some("https://cdn.euroncap.com/media/6398/volvo_v40_2012_1uncrashed.jpg?mode=crop&width=359&height=235"),
        category: Category::Compact,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    CarSeed {
        name: "Toyota Corolla",
        year: 2019,
        displacement_cc: 1598,
        power_hp: 132,
        trunk_litres: 471,
        price_per_day: 8000,
        image_url: Some("https://www.autoaddikt.hu/kepek/2024-toyota-corolla-le-usa-florida-teszt-autoaddikt-20.jpg"),
        category: Category::Compact,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Volkswagen Golf 6",
        year: 2012,
        displacement_cc: 1598,
        power_hp: 105,
        trunk_litres: 350,
        price_per_day: 4000,
        image_url: Some("https://upload.wikimedia.org/wikipedia/commons/thumb/a/a2/VW_Golf_1.6_TDI_Style_%28VI%29_%E2%80%93_Frontansicht%2C_25._Februar_2012%2C_Ratingen.jpg/1200px-VW_Golf_1.6_TDI_Style_%28VI%29_%E2%80%93_Frontansicht%2C_25._Februar_2012%2C_Ratingen.jpg"),
        category: Category::Compact,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    CarSeed {
        name: "Hyundai i30",
        year: 2014,
        displacement_cc: 1396,
        power_hp: 99,
        trunk_litres: 600,
        price_per_day: 4500,
        image_url: Some("https://kocsi-media.hu/948/hyundai-i30-cw-1-4-crdi-comfort-749539_547236_1xl.jpg"),
        category: Category::Compact,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Ford Focus",
        year: 2012,
        displacement_cc: 1560,
        power_hp: 116,
        trunk_litres: 476,
        price_per_day: 4500,
        image_url: Some("https://img.jofogas.hu/620x620aspect/Ford_Focus_1_6_Ti_Vct_Trend_Plus_Valos_KM_694492716379187.jpg"),
        category: Category::Compact,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    CarSeed {
        name: "Kia Ceed",
        year: 2019,
        displacement_cc: 1353,
        power_hp: 140,
        trunk_litres: 395,
        price_per_day: 6000,
        image_url: Some("https://kocsi-media.hu/1105/kia-ceed-ceed-sw-1-5-t-gdi-gold-361195_571403_1xl.jpg"),
        category: Category::Compact,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Opel Astra",
        year: 2016,
        displacement_cc: 1399,
        power_hp: 125,
        trunk_litres: 370,
        price_per_day: 5000,
        image_url: None,
        category: Category::Compact,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Honda Civic",
        year: 2018,
        displacement_cc: 1498,
        power_hp: 182,
        trunk_litres: 478,
        price_per_day: 7000,
        image_url: None,
        category: Category::Compact,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Mazda 3",
        year: 2017,
        displacement_cc: 1998,
        power_hp: 120,
        trunk_litres: 364,
        price_per_day: 6500,
        image_url: None,
        category: Category::Compact,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Toyota Prius",
        year: 2020,
        displacement_cc: 1798,
        power_hp: 122,
        trunk_litres: 457,
        price_per_day: 9000,
        image_url: None,
        category: Category::Compact,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Hybrid,
        seats: 5,
    },
    // Mid-size
    CarSeed {
        name: "Mercedes C-Class",
        year: 2024,
        displacement_cc: 1496,
        power_hp: 170,
        trunk_litres: 455,
        price_per_day: 30_000,
        image_url: Some("https://www.iihs.org/cdn-cgi/image/width=636/api/ratings/model-year-images/3261/"),
        category: Category::Midsize,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Volkswagen Passat",
        year: 2016,
        displacement_cc: 1968,
        power_hp: 150,
        trunk_litres: 586,
        price_per_day: 12_000,
        image_url: Some("https://upload.wikimedia.org/wikipedia/commons/9/91/VW_Passat_B8_Limousine_2.0_TDI_Highline.JPG"),
        category: Category::Midsize,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    CarSeed {
        name: "Skoda Octavia",
        year: 2016,
        displacement_cc: 1968,
        power_hp: 150,
        trunk_litres: 610,
        price_per_day: 10_000,
        image_url: Some("https://img.jofogas.hu/620x620aspect/Skoda_Octavia_Combi_1_6_CR_TDI_Style_DSG_278192716805168.jpg"),
        category: Category::Midsize,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    CarSeed {
        name: "Mazda 6",
        year: 2015,
        displacement_cc: 2191,
        power_hp: 175,
        trunk_litres: 480,
        price_per_day: 11_000,
        image_url: Some("https://cms-assets.autoscout24.com/uaddx06iwzdz/19TLIpjwPxGgTRUfiGyFtm/d8887ab3bf2e09ad97da06bfb1c93f37/mazda-6-l-01.jpg?w=1100"),
        category: Category::Midsize,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    CarSeed {
        name: "Lexus IS",
        year: 2006,
        displacement_cc: 2231,
        power_hp: 177,
        trunk_litres: 378,
        price_per_day: 7000,
        image_url: Some("https://img.jofogas.hu/620x620aspect/Lexus_Is_220d_Sport_185582716768484.jpg"),
        category: Category::Midsize,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Volvo S60",
        year: 2023,
        displacement_cc: 1969,
        power_hp: 250,
        trunk_litres: 427,
        price_per_day: 28_000,
        image_url: Some("https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTcRxYay1CYgG8aHLsmqDC1gDRq_o4NvKGjKA&s"),
        category: Category::Midsize,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "BMW 320d",
        year: 2019,
        displacement_cc: 1995,
        power_hp: 190,
        trunk_litres: 480,
        price_per_day: 20_000,
        image_url: None,
        category: Category::Midsize,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    CarSeed {
        name: "Audi A4",
        year: 2017,
        displacement_cc: 1968,
        power_hp: 190,
        trunk_litres: 480,
        price_per_day: 18_000,
        image_url: None,
        category: Category::Midsize,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    CarSeed {
        name: "Toyota Camry",
        year: 2021,
        displacement_cc: 2487,
        power_hp: 218,
        trunk_litres: 524,
        price_per_day: 22_000,
        image_url: None,
        category: Category::Midsize,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Hybrid,
        seats: 5,
    },
    CarSeed {
        name: "Ford Mondeo",
        year: 2015,
        displacement_cc: 1999,
        power_hp: 150,
        trunk_litres: 541,
        price_per_day: 9000,
        image_url: None,
        category: Category::Midsize,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    // Luxury
    CarSeed {
        name: "Audi A8",
        year: 2011,
        displacement_cc: 6299,
        power_hp: 500,
        trunk_litres: 510,
        price_per_day: 80_000,
        image_url: Some("https://media.carsandbids.com/cdn-cgi/image/width=2080,quality=70/d9b636c2ec84ddc3bc7f2eb32861b39bdd5f9683/photos/KVVdj8NY-yKNHf0J5sU-(edit).jpg?t=171242254321"),
        category: Category::Luxury,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 4,
    },
    CarSeed {
        name: "BMW 750i",
        year: 2018,
        displacement_cc: 4395,
        power_hp: 449,
        trunk_litres: 515,
        price_per_day: 75_000,
        image_url: Some("https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTlzmPqoZErEqk01A6DVNvc_6awbpo2PRCtOw&s"),
        category: Category::Luxury,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 4,
    },
    CarSeed {
        name: "Mercedes S-Class",
        year: 2015,
        displacement_cc: 4663,
        power_hp: 455,
        trunk_litres: 530,
        price_per_day: 80_000,
        image_url: Some("https://www.cnet.com/a/img/resize/5461c499ae8f28a8db50d3ed00e28d8ae33884e9/hub/2015/08/05/bb958551-4dc4-4101-8df5-e36c0538e7bd/2015mercedes-benzs550hybrid-005.jpg?auto=webp&width=768"),
        category: Category::Luxury,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 4,
    },
    CarSeed {
        name: "Porsche Panamera",
        year: 2017,
        displacement_cc: 2894,
        power_hp: 330,
        trunk_litres: 495,
        price_per_day: 85_000,
        image_url: None,
        category: Category::Luxury,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 4,
    },
    CarSeed {
        name: "Lexus LS 500h",
        year: 2018,
        displacement_cc: 3456,
        power_hp: 359,
        trunk_litres: 440,
        price_per_day: 70_000,
        image_url: None,
        category: Category::Luxury,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Hybrid,
        seats: 5,
    },
    CarSeed {
        name: "Jaguar XJ",
        year: 2016,
        displacement_cc: 2993,
        power_hp: 300,
        trunk_litres: 520,
        price_per_day: 60_000,
        image_url: None,
        category: Category::Luxury,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    CarSeed {
        name: "Maserati Quattroporte",
        year: 2016,
        displacement_cc: 2979,
        power_hp: 350,
        trunk_litres: 530,
        price_per_day: 75_000,
        image_url: None,
        category: Category::Luxury,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "BMW 740Le",
        year: 2020,
        displacement_cc: 1998,
        power_hp: 394,
        trunk_litres: 420,
        price_per_day: 72_000,
        image_url: None,
        category: Category::Luxury,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Hybrid,
        seats: 5,
    },
    CarSeed {
        name: "Audi A7",
        year: 2019,
        displacement_cc: 2967,
        power_hp: 286,
        trunk_litres: 535,
        price_per_day: 65_000,
        image_url: None,
        category: Category::Luxury,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    // SUV
    CarSeed {
        name: "Ford Kuga",
        year: 2012,
        displacement_cc: 2521,
        power_hp: 200,
        trunk_litres: 410,
        price_per_day: 18_000,
        image_url: Some("https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQhyZCmxpWr91g5RIC7t29sUuzO7EVxoaXwDw&s"),
        category: Category::Suv,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 5,
    },
    CarSeed {
        name: "Hyundai Tucson",
        year: 2021,
        displacement_cc: 1598,
        power_hp: 136,
        trunk_litres: 513,
        price_per_day: 20_000,
        image_url: Some("https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTodrV_fE69_7WsZvep9oMNJ7awChgg9LqO4Q&s"),
        category: Category::Suv,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    CarSeed {
        name: "Kia Sportage",
        year: 2015,
        displacement_cc: 1995,
        power_hp: 184,
        trunk_litres: 564,
        price_per_day: 11_000,
        image_url: Some("https://img.jofogas.hu/620x620aspect/KIA_Sportage_1_7_CRDi_Jubileum_Kamera_Navi_Bor_____960512707423063.jpg"),
        category: Category::Suv,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    CarSeed {
        name: "Volkswagen Touareg",
        year: 2018,
        displacement_cc: 2967,
        power_hp: 286,
        trunk_litres: 810,
        price_per_day: 45_000,
        image_url: Some("https://cdn.joautok.hu/prod/postings/images/bdc9228f-1f24-4f8a-bb8e-32feba5d38be_0c959853ab745ca2406a5074061b036c7677999760d3a9e278912ead55f2df32.jpg"),
        category: Category::Suv,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        seats: 7,
    },
    CarSeed {
        name: "Toyota RAV4 Hybrid",
        year: 2020,
        displacement_cc: 2487,
        power_hp: 218,
        trunk_litres: 580,
        price_per_day: 25_000,
        image_url: None,
        category: Category::Suv,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Hybrid,
        seats: 5,
    },
    CarSeed {
        name: "Skoda Kodiaq",
        year: 2019,
        displacement_cc: 1968,
        power_hp: 150,
        trunk_litres: 720,
        price_per_day: 22_000,
        image_url: None,
        category: Category::Suv,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        seats: 7,
    },
    CarSeed {
        name: "Nissan Qashqai",
        year: 2017,
        displacement_cc: 1598,
        power_hp: 130,
        trunk_litres: 430,
        price_per_day: 12_000,
        image_url: None,
        category: Category::Suv,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    CarSeed {
        name: "BMW X5",
        year: 2019,
        displacement_cc: 2993,
        power_hp: 265,
        trunk_litres: 650,
        price_per_day: 50_000,
        image_url: None,
        category: Category::Suv,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        seats: 5,
    },
    CarSeed {
        name: "Volvo XC90",
        year: 2020,
        displacement_cc: 1969,
        power_hp: 390,
        trunk_litres: 680,
        price_per_day: 55_000,
        image_url: None,
        category: Category::Suv,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Hybrid,
        seats: 7,
    },
    // Sports
    CarSeed {
        name: "Porsche 718 Cayman",
        year: 2013,
        displacement_cc: 2706,
        power_hp: 275,
        trunk_litres: 425,
        price_per_day: 85_000,
        image_url: Some("https://supercarsdrive.hu/cdn/shop/files/PorscheCayman__elmenyvezetes_berles_web_15_1_a04585c6-2f9b-4950-bf5a-8ece2bdb1657.png?v=1727514184&width=1445"),
        category: Category::Sports,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 2,
    },
    CarSeed {
        name: "BMW M4",
        year: 2022,
        displacement_cc: 2993,
        power_hp: 510,
        trunk_litres: 440,
        price_per_day: 90_000,
        image_url: Some("https://images.prismic.io/exclusiveresorts/521030be-64d1-4525-a2d0-1fbab564218f_BMW+M4+001_ut2z6l-FullBleed_2880x1620.jpg?auto=compress,format&w=2560&q=70"),
        category: Category::Sports,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 4,
    },
    CarSeed {
        name: "Audi TT RS",
        year: 2009,
        displacement_cc: 2480,
        power_hp: 340,
        trunk_litres: 290,
        price_per_day: 60_000,
        image_url: Some("https://www.edmunds.com/assets/m/audi/tt-rs/2012/oem/2012_audi_tt-rs_coupe_quattro_fq_oem_1_600.jpg"),
        category: Category::Sports,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 2,
    },
    CarSeed {
        name: "Ford Mustang",
        year: 2025,
        displacement_cc: 5000,
        power_hp: 460,
        trunk_litres: 381,
        price_per_day: 75_000,
        image_url: Some("https://exportimg.hasznaltautocdn.com/2048x1536/6053/21755053/10519920/watermark=0/51e5366e021734a6e5cf0e42022b084a4b6187ded03c51fda55ff5711e0152cc.jpg"),
        category: Category::Sports,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 4,
    },
    CarSeed {
        name: "Chevrolet Camaro",
        year: 2019,
        displacement_cc: 6162,
        power_hp: 455,
        trunk_litres: 258,
        price_per_day: 70_000,
        image_url: None,
        category: Category::Sports,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 4,
    },
    CarSeed {
        name: "Nissan 370Z",
        year: 2015,
        displacement_cc: 3696,
        power_hp: 328,
        trunk_litres: 235,
        price_per_day: 45_000,
        image_url: None,
        category: Category::Sports,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 2,
    },
    CarSeed {
        name: "Mazda MX-5",
        year: 2018,
        displacement_cc: 1998,
        power_hp: 184,
        trunk_litres: 130,
        price_per_day: 30_000,
        image_url: None,
        category: Category::Sports,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Benzin,
        seats: 2,
    },
    CarSeed {
        name: "Toyota GR Supra",
        year: 2021,
        displacement_cc: 2998,
        power_hp: 340,
        trunk_litres: 290,
        price_per_day: 65_000,
        image_url: None,
        category: Category::Sports,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 2,
    },
    CarSeed {
        name: "Porsche 911 Carrera",
        year: 2019,
        displacement_cc: 2981,
        power_hp: 385,
        trunk_litres: 132,
        price_per_day: 95_000,
        image_url: None,
        category: Category::Sports,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Benzin,
        seats: 4,
    },
];
