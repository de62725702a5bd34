// Average rent per ward and room type, in 万円. CHINTAI, February 2026.

/// Column order of every row below.
pub const STANDARD_LAYOUTS: [&str; 6] = ["1R", "1K", "1DK", "1LDK", "2DK", "2LDK"];

pub const TOKYO_MIN_RENT: f64 = 3.0;
pub const OSAKA_MIN_RENT: f64 = 2.5;

pub const TOKYO_RENT: [(&str, [f64; 6]); 23] = [
    ("千代田区", [10.5, 11.0, 13.5, 19.0, 15.0, 27.0]),
    ("中央区", [10.0, 10.5, 13.0, 18.5, 14.5, 25.0]),
    ("港区", [11.5, 12.0, 15.0, 22.0, 17.0, 32.0]),
    ("新宿区", [8.5, 9.0, 11.5, 16.0, 12.5, 22.0]),
    ("文京区", [8.0, 8.5, 11.0, 15.0, 12.0, 20.0]),
    ("台東区", [8.0, 8.5, 10.5, 14.5, 11.5, 19.0]),
    ("墨田区", [7.5, 8.0, 10.0, 13.5, 10.5, 17.0]),
    ("江東区", [7.5, 8.0, 10.5, 14.0, 11.0, 18.5]),
    ("品川区", [8.5, 9.0, 11.5, 16.0, 13.0, 22.0]),
    ("目黒区", [8.5, 9.5, 12.0, 17.0, 13.5, 24.0]),
    ("大田区", [7.0, 7.5, 9.5, 13.0, 10.0, 16.0]),
    ("世田谷区", [7.5, 8.0, 10.5, 14.5, 11.5, 19.0]),
    ("渋谷区", [9.5, 10.0, 13.0, 19.0, 15.0, 27.0]),
    ("中野区", [7.0, 7.5, 9.5, 13.0, 10.0, 16.5]),
    ("杉並区", [7.0, 7.5, 9.5, 13.0, 10.0, 16.0]),
    ("豊島区", [7.5, 8.0, 10.5, 14.0, 11.0, 18.0]),
    ("北区", [7.0, 7.5, 9.0, 12.5, 9.5, 15.5]),
    ("荒川区", [7.0, 7.5, 9.0, 12.0, 9.5, 15.0]),
    ("板橋区", [6.5, 7.0, 8.5, 11.5, 9.0, 14.0]),
    ("練馬区", [6.0, 6.5, 8.0, 11.0, 8.5, 13.5]),
    ("足立区", [6.0, 6.5, 7.5, 10.0, 8.0, 12.0]),
    ("葛飾区", [6.0, 6.5, 7.5, 10.0, 8.0, 12.0]),
    ("江戸川区", [6.0, 6.5, 7.5, 10.5, 8.0, 12.5]),
];

pub const OSAKA_RENT: [(&str, [f64; 6]); 24] = [
    ("都島区", [5.5, 6.0, 7.0, 9.5, 7.5, 11.0]),
    ("福島区", [6.0, 6.5, 7.5, 10.5, 8.5, 13.0]),
    ("此花区", [5.0, 5.5, 6.5, 8.5, 6.5, 9.5]),
    ("西区", [6.5, 7.0, 8.0, 11.5, 9.0, 14.0]),
    ("港区", [5.0, 5.5, 6.5, 8.5, 7.0, 10.0]),
    ("大正区", [4.5, 5.0, 5.5, 7.5, 6.0, 8.5]),
    ("天王寺区", [6.0, 6.5, 7.5, 10.5, 8.5, 13.0]),
    ("浪速区", [6.0, 6.5, 7.5, 10.0, 8.0, 12.0]),
    ("西淀川区", [4.5, 5.0, 5.5, 7.5, 6.0, 8.5]),
    ("東淀川区", [5.0, 5.5, 6.0, 8.0, 6.5, 9.5]),
    ("東成区", [5.0, 5.5, 6.5, 8.5, 7.0, 10.0]),
    ("生野区", [4.5, 5.0, 5.5, 7.0, 5.5, 8.0]),
    ("旭区", [4.5, 5.0, 5.5, 7.5, 6.0, 8.5]),
    ("城東区", [5.0, 5.5, 6.5, 8.5, 7.0, 10.0]),
    ("阿倍野区", [5.5, 6.0, 7.0, 9.5, 7.5, 11.5]),
    ("住吉区", [5.0, 5.5, 6.0, 8.0, 6.5, 9.5]),
    ("東住吉区", [4.5, 5.0, 5.5, 7.5, 6.0, 8.5]),
    ("西成区", [4.0, 4.5, 5.0, 6.5, 5.0, 7.0]),
    ("淀川区", [5.5, 6.0, 7.0, 9.5, 7.5, 11.0]),
    ("鶴見区", [5.0, 5.5, 6.0, 8.0, 6.5, 9.5]),
    ("住之江区", [4.5, 5.0, 5.5, 7.5, 6.0, 8.5]),
    ("平野区", [4.5, 5.0, 5.5, 7.0, 5.5, 8.0]),
    ("北区", [6.5, 7.0, 8.0, 11.0, 9.0, 14.0]),
    ("中央区", [6.5, 7.0, 8.0, 11.5, 9.0, 14.5]),
];
